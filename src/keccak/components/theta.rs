pub fn theta(lanes: &mut [[u64; 5]; 5]) {
	let parities = lanes.map(|column| column.iter().fold(0, |acc, &lane| acc ^ lane));

	for (x, column) in lanes.iter_mut().enumerate() {
		let effect = parities[(x + 4) % 5] ^ parities[(x + 1) % 5].rotate_left(1);

		for lane in column.iter_mut() {
			*lane ^= effect;
		}
	}
}

#[test]
fn single_bit_spreads_to_two_columns() {
	let mut lanes = [[0; 5]; 5];
	lanes[0][0] = 1;

	theta(&mut lanes);

	// column 0 keeps its bit, column 1 picks up the parity unshifted,
	// column 4 picks it up rotated by one
	assert_eq!(lanes[0], [1, 0, 0, 0, 0]);
	assert_eq!(lanes[1], [1; 5]);
	assert_eq!(lanes[4], [2; 5]);
	assert_eq!(lanes[2], [0; 5]);
	assert_eq!(lanes[3], [0; 5]);
}
