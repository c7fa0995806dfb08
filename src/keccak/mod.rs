//! The Keccak-f\[1600\] permutation and the SHA-3 hashes built on it, following
//! [FIPS 202](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf).

mod rotation_offsets;
mod round_constants;
mod state;

use rotation_offsets::ROTATION_OFFSETS;
use round_constants::ROUND_CONSTANTS;

pub use state::{Cursor, State};

mod components {
	pub mod chi;
	pub mod iota;
	pub mod pi;
	pub mod rho;
	pub mod theta;
}

use components::chi::chi;
use components::iota::iota;
use components::pi::pi;
use components::rho::rho;
use components::theta::theta;

pub mod sha3;

/// Number of rounds in the full Keccak-f\[1600\] permutation.
pub const ROUNDS: usize = 24;

/// Applies round `round_index` (0 to 23) of the permutation.
pub fn round(state: &mut State, round_index: usize) {
	debug_assert!(round_index < ROUNDS);

	let lanes = state.lanes_mut();

	theta(lanes);
	rho(lanes);
	pi(lanes);
	chi(lanes);
	iota(lanes, round_index);
}

/// Applies the last `rounds` rounds of the permutation (Keccak-p\[1600, rounds\]).
pub fn keccak_p1600(state: &mut State, rounds: usize) {
	debug_assert!(rounds <= ROUNDS);

	for round_index in ROUNDS - rounds .. ROUNDS {
		round(state, round_index);
	}
}

/// Applies the full 24-round permutation.
pub fn keccak_f1600(state: &mut State) {
	keccak_p1600(state, ROUNDS);
}

#[test]
fn permutes_zero_state() {
	let mut state = State::new();
	keccak_f1600(&mut state);

	assert_eq!(state.lane(0, 0), 0xf1258f7940e1dde7);
	assert_eq!(state.lane(1, 0), 0x84d5ccf933c0478a);
}

#[test]
fn full_permutation_is_all_rounds_in_order() {
	let mut lanes = [[0; 5]; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			lanes[x][y] = 0x0123_4567_89ab_cdefu64.rotate_left((x + 5 * y) as u32);
		}
	}

	let mut by_rounds = State::from_lanes(lanes);
	let mut whole = by_rounds;

	for round_index in 0 .. ROUNDS {
		round(&mut by_rounds, round_index);
	}

	keccak_f1600(&mut whole);
	assert_eq!(by_rounds, whole);
}

#[test]
fn reduced_rounds_use_the_final_round_constants() {
	let mut reduced = State::new();
	keccak_p1600(&mut reduced, 1);

	let mut last = State::new();
	round(&mut last, ROUNDS - 1);

	assert_eq!(reduced, last);
	// theta through chi keep the zero state at zero, so only iota acts
	assert_eq!(reduced.lane(0, 0), ROUND_CONSTANTS[ROUNDS - 1]);
}
