pub fn pi(lanes: &mut [[u64; 5]; 5]) {
	let old = *lanes;

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			lanes[y][(2 * x + 3 * y) % 5] = old[x][y];
		}
	}
}

#[test]
fn moves_lanes_to_new_positions() {
	let mut lanes = [[0; 5]; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			lanes[x][y] = (10 * x + y) as u64;
		}
	}

	pi(&mut lanes);

	assert_eq!(lanes[0][0], 0);
	// (1, 0) -> (0, 2)
	assert_eq!(lanes[0][2], 10);
	// (0, 1) -> (1, 3)
	assert_eq!(lanes[1][3], 1);
	// (3, 4) -> (4, 3)
	assert_eq!(lanes[4][3], 34);
}
