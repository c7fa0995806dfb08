/// The 1600-bit Keccak state: 25 lanes of 64 bits, indexed `[x][y]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
	lanes: [[u64; 5]; 5],
}

impl State {
	/// Returns the all-zero state.
	pub const fn new() -> Self {
		Self {lanes: [[0; 5]; 5]}
	}

	pub const fn from_lanes(lanes: [[u64; 5]; 5]) -> Self {
		Self {lanes}
	}

	pub const fn lanes(&self) -> &[[u64; 5]; 5] {
		&self.lanes
	}

	pub(super) fn lanes_mut(&mut self) -> &mut [[u64; 5]; 5] {
		&mut self.lanes
	}

	pub const fn lane(&self, x: usize, y: usize) -> u64 {
		self.lanes[x][y]
	}

	pub fn xor_lane(&mut self, x: usize, y: usize, val: u64) {
		self.lanes[x][y] ^= val;
	}

	/// XORs a byte into the state at the position the cursor points at.
	pub fn xor_byte(&mut self, at: Cursor, byte: u8) {
		self.lanes[at.x][at.y] ^= u64::from(byte) << at.bit_offset;
	}

	/// Reads the byte at the position the cursor points at.
	pub fn byte_at(&self, at: Cursor) -> u8 {
		(self.lanes[at.x][at.y] >> at.bit_offset) as u8
	}

	/// Zeroes every lane.
	pub fn reset(&mut self) {
		#[cfg(feature = "zeroize")]
		zeroize::Zeroize::zeroize(&mut self.lanes);

		#[cfg(not(feature = "zeroize"))]
		{
			self.lanes = [[0; 5]; 5];
		}
	}
}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for State {
	fn zeroize(&mut self) {
		zeroize::Zeroize::zeroize(&mut self.lanes);
	}
}

/// A byte position inside the state.
///
/// Bytes are laid out little-endian within a lane, and lanes are visited with
/// `x` varying fastest, which is the order SHA3 absorbs and squeezes bytes in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
	x: usize,
	y: usize,
	bit_offset: u32,
}

impl Cursor {
	/// The first byte of lane `(0, 0)`.
	pub const START: Self = Self {x: 0, y: 0, bit_offset: 0};

	/// The first byte of the lane with the given linear index (`x + 5 * y`).
	pub const fn at_lane(index: usize) -> Self {
		Self {x: index % 5, y: index / 5, bit_offset: 0}
	}

	/// The most significant byte of the lane with the given linear index.
	pub const fn last_byte_of_lane(index: usize) -> Self {
		Self {x: index % 5, y: index / 5, bit_offset: 56}
	}

	pub const fn x(&self) -> usize {
		self.x
	}

	pub const fn y(&self) -> usize {
		self.y
	}

	pub const fn bit_offset(&self) -> u32 {
		self.bit_offset
	}

	/// Moves the cursor forward by one byte.
	pub fn advance(&mut self) {
		self.bit_offset += 8;

		if self.bit_offset == 64 {
			self.bit_offset = 0;
			self.x += 1;

			if self.x == 5 {
				self.x = 0;
				self.y += 1;
			}
		}
	}
}

#[test]
fn cursor_walks_lanes_in_absorption_order() {
	let mut cursor = Cursor::START;

	for _ in 0 .. 7 {
		cursor.advance();
	}

	assert_eq!((cursor.x(), cursor.y(), cursor.bit_offset()), (0, 0, 56));

	cursor.advance();
	assert_eq!(cursor, Cursor::at_lane(1));

	// 8 * 5 bytes fill the first row of lanes
	for _ in 8 .. 40 {
		cursor.advance();
	}

	assert_eq!(cursor, Cursor::at_lane(5));
	assert_eq!((cursor.x(), cursor.y()), (0, 1));
}

#[test]
fn cursor_matches_linear_byte_index() {
	let mut cursor = Cursor::START;

	for i in 0 .. 200 {
		assert_eq!(cursor.x() + 5 * cursor.y(), i / 8);
		assert_eq!(cursor.bit_offset() as usize, 8 * (i % 8));
		cursor.advance();
	}
}

#[test]
fn byte_access_is_little_endian() {
	let mut state = State::new();
	let mut cursor = Cursor::at_lane(7);

	for byte in [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef] {
		state.xor_byte(cursor, byte);
		cursor.advance();
	}

	assert_eq!(state.lane(2, 1), 0xefcd_ab89_6745_2301);
	assert_eq!(state.byte_at(Cursor::last_byte_of_lane(7)), 0xef);
	assert_eq!(cursor, Cursor::at_lane(8));
}

#[test]
fn reset_zeroes_every_lane() {
	let mut state = State::from_lanes([[u64::MAX; 5]; 5]);
	state.reset();
	assert_eq!(state, State::new());
}
