//! Byte-for-byte comparison against the RustCrypto `sha3` crate across message
//! lengths that straddle every variant's rate.

use sha3::Digest as _;
use spongecrypt::sha3::{compute, Variant};

fn reference(variant: Variant, msg: &[u8]) -> Vec<u8> {
	match variant {
		Variant::Sha3_224 => sha3::Sha3_224::digest(msg).to_vec(),
		Variant::Sha3_256 => sha3::Sha3_256::digest(msg).to_vec(),
		Variant::Sha3_384 => sha3::Sha3_384::digest(msg).to_vec(),
		Variant::Sha3_512 => sha3::Sha3_512::digest(msg).to_vec(),
	}
}

fn message(len: usize, tag: u8) -> Vec<u8> {
	(0 .. len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(tag)).collect()
}

#[test]
fn rate_boundaries_match() {
	for variant in Variant::ALL {
		let rate = variant.rate();

		for len in [rate - 1, rate, rate + 1, 2 * rate - 1, 2 * rate, 2 * rate + 1] {
			let msg = message(len, 0x3c);
			assert_eq!(
				compute(variant, &msg).as_bytes(),
				&reference(variant, &msg)[..],
				"{variant} mismatch at length {len}",
			);
		}
	}
}

#[test]
fn every_short_length_matches() {
	for variant in Variant::ALL {
		for len in 0 ..= 3 * 144 + 7 {
			let msg = message(len, len as u8);
			assert_eq!(
				compute(variant, &msg).as_bytes(),
				&reference(variant, &msg)[..],
				"{variant} mismatch at length {len}",
			);
		}
	}
}

#[test]
fn long_message_matches() {
	let msg = vec![b'a'; 1_000_000];

	for variant in Variant::ALL {
		assert_eq!(compute(variant, &msg).as_bytes(), &reference(variant, &msg)[..]);
	}
}

#[test]
fn single_bit_flips_change_about_half_the_output() {
	let msg = message(100, 0x77);

	for variant in Variant::ALL {
		let base = compute(variant, &msg);
		let mut changed = 0;
		let mut total = 0;

		for bit in 0 .. 64 {
			let mut flipped = msg.clone();
			flipped[bit * 13 % msg.len()] ^= 1 << (bit % 8);

			let other = compute(variant, &flipped);

			changed += base
				.iter()
				.zip(other.iter())
				.map(|(a, b)| (a ^ b).count_ones())
				.sum::<u32>();
			total += 8 * base.len() as u32;
		}

		let ratio = f64::from(changed) / f64::from(total);
		assert!((0.45 .. 0.55).contains(&ratio), "{variant} avalanche ratio {ratio}");
	}
}
