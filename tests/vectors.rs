//! Published SHA3-256 known-answer vectors.

use kryptonsponge::keccak256;
use kryptonsponge::sha3::sha3_512;

fn check(input: &[u8], expected_hex: &str) {
	let expected = hex::decode(expected_hex).unwrap();
	assert_eq!(keccak256(input)[..], expected[..]);
}

#[test]
fn empty_input() {
	check(b"", "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a");
}

#[test]
fn abc() {
	check(b"abc", "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532");
}

#[test]
fn two_block_message() {
	check(
		b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
		"41c0dba2a9d6240849100376a8235e2c82e1b9998a999e21db32dd97496d3376",
	);

	assert_eq!(
		hex::encode(sha3_512(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq")),
		"04a371e84ecfb5b8b77cb48610fca8182dd457ce6f326a0fd3d7ec2f1e91636dee691fbe0c985302ba1b0d8dc78c086346b533b49c030d99a27daf1139d6e75e",
	);
}

#[test]
fn rate_boundaries() {
	check(&[0; 135], "7d080d7ba978a75c8a7d1f9be566c859084509c9c2b4928435c225d5777d98e3");
	check(&[0; 136], "e772c9cf9eb9c991cdfcf125001b454fdbc0a95f188d1b4c844aa032ad6e075e");
}

#[test]
fn one_million_a() {
	check(&vec![b'a'; 1_000_000], "5c8875ae474a3634ba4fd55ec85bffd661f32aca75c6d699d0cdcb6c115891c1");
}

#[test]
fn calls_from_many_threads_agree() {
	let expected = keccak256(b"abc");

	let handles: Vec<_> = (0 .. 8)
		.map(|_| std::thread::spawn(|| keccak256(b"abc")))
		.collect();

	for handle in handles {
		assert_eq!(handle.join().unwrap(), expected);
	}
}
