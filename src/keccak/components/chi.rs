pub fn chi(lanes: &mut [[u64; 5]; 5]) {
	for y in 0 .. 5 {
		let row: [u64; 5] = core::array::from_fn(|x| lanes[x][y]);

		for x in 0 .. 5 {
			lanes[x][y] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
		}
	}
}

#[test]
fn combines_row_neighbours() {
	let mut lanes = [[0; 5]; 5];
	lanes[2][1] = 0b1100;
	lanes[3][1] = 0b1010;
	lanes[4][1] = 0b0110;

	chi(&mut lanes);

	// x = 2: 1100 ^ (!1010 & 0110)
	assert_eq!(lanes[2][1], 0b1000);
	// x = 1: 0000 ^ (!1100 & 1010)
	assert_eq!(lanes[1][1], 0b0010);
	// other rows are untouched by an all-zero input
	assert_eq!(lanes[2][0], 0);
}
