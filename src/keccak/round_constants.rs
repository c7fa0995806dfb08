use super::ROUNDS;

// output bit `t` of the degree-8 LFSR x^8 + x^6 + x^5 + x^4 + 1, seeded with 1
const fn rc(t: usize) -> bool {
	let mut reg: u16 = 1;
	let mut i = 0;

	while i < t % 255 {
		reg <<= 1;

		if reg & 0x100 != 0 {
			reg ^= 0x171;
		}

		i += 1;
	}

	reg & 1 != 0
}

const fn compute_round_constants() -> [u64; ROUNDS] {
	let mut out = [0; ROUNDS];
	let mut round = 0;

	while round < ROUNDS {
		let mut j = 0;

		// only bit positions 2^j - 1 of the constant are ever set
		while j < 7 {
			if rc(j + 7 * round) {
				out[round] |= 1 << ((1 << j) - 1);
			}

			j += 1;
		}

		round += 1;
	}

	out
}

/// The iota constants, one per round.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = compute_round_constants();

#[test]
fn matches_published_constants() {
	let expected = [
		0x0000000000000001, 0x0000000000008082, 0x800000000000808a, 0x8000000080008000,
		0x000000000000808b, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
		0x000000000000008a, 0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
		0x000000008000808b, 0x800000000000008b, 0x8000000000008089, 0x8000000000008003,
		0x8000000000008002, 0x8000000000000080, 0x000000000000800a, 0x800000008000000a,
		0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
	];

	assert_eq!(ROUND_CONSTANTS, expected);
}
