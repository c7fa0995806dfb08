use super::super::ROUND_CONSTANTS;

pub fn iota(lanes: &mut [[u64; 5]; 5], round_index: usize) {
	lanes[0][0] ^= ROUND_CONSTANTS[round_index];
}
