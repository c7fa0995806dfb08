use super::super::ROTATION_OFFSETS;

pub fn rho(lanes: &mut [[u64; 5]; 5]) {
	for (column, offsets) in lanes.iter_mut().zip(ROTATION_OFFSETS) {
		for (lane, offset) in column.iter_mut().zip(offsets) {
			*lane = lane.rotate_left(offset);
		}
	}
}

#[test]
fn rotates_by_table_offsets() {
	let mut lanes = [[1; 5]; 5];

	rho(&mut lanes);

	assert_eq!(lanes[0][0], 1);
	assert_eq!(lanes[1][0], 1 << 1);
	assert_eq!(lanes[0][1], 1 << 36);
	assert_eq!(lanes[4][4], 1 << 14);
}
