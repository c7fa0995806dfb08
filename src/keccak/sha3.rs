//! An implementation of [SHA-3](https://en.wikipedia.org/wiki/SHA-3).
//!
//! All four fixed-length variants share one sponge: message blocks of `rate`
//! bytes are XORed into the state and permuted, the tail is padded with the
//! SHA-3 domain bits and pad10*1, and the digest is read straight back out of
//! the first lanes of the state.

use core::fmt;
use core::ops::Deref;
use core::str::FromStr;

use log::{debug, trace};

use super::{keccak_p1600, Cursor, State, ROUNDS};
use crate::Error;

/// Width of the permutation in bits.
const STATE_BITS: usize = 1600;

/// Largest digest any variant produces.
pub const MAX_DIGEST_SIZE: usize = 64;

/// Domain separation bits `01` followed by the first padding bit.
const DOMAIN_AND_PAD: u8 = 0x06;

/// Last padding bit, placed in the final byte of the rate.
const PAD_END: u8 = 0x80;

/// The four SHA-3 hash functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
	Sha3_224,
	Sha3_256,
	Sha3_384,
	Sha3_512,
}

/// Sponge parameters of one [`Variant`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantParams {
	pub digest_size: usize,
	/// Bytes absorbed per permutation call.
	pub rate: usize,
	/// `rate / 8`
	pub words_per_block: usize,
	pub rounds: usize,
}

const fn params(digest_size: usize, rate: usize) -> VariantParams {
	VariantParams {
		digest_size,
		rate,
		words_per_block: rate / 8,
		rounds: ROUNDS,
	}
}

/// Indexed by `Variant as usize`.
const VARIANT_TABLE: [VariantParams; 4] = [
	params(28, 144),
	params(32, 136),
	params(48, 104),
	params(64, 72),
];

const fn table_is_consistent() -> bool {
	let mut i = 0;

	while i < VARIANT_TABLE.len() {
		let row = &VARIANT_TABLE[i];
		let capacity_bits = 2 * 8 * row.digest_size;

		if row.rate * 8 + capacity_bits != STATE_BITS
			|| row.rate % 8 != 0
			|| row.digest_size > row.rate
			|| row.digest_size > MAX_DIGEST_SIZE
		{
			return false;
		}

		i += 1;
	}

	true
}

const _: () = assert!(table_is_consistent());

impl Variant {
	pub const ALL: [Self; 4] = [Self::Sha3_224, Self::Sha3_256, Self::Sha3_384, Self::Sha3_512];

	pub const fn params(self) -> VariantParams {
		VARIANT_TABLE[self as usize]
	}

	/// Length of the digest in bytes.
	pub const fn digest_size(self) -> usize {
		self.params().digest_size
	}

	pub const fn rate(self) -> usize {
		self.params().rate
	}

	pub const fn words_per_block(self) -> usize {
		self.params().words_per_block
	}

	pub const fn rounds(self) -> usize {
		self.params().rounds
	}

	pub const fn capacity_bits(self) -> usize {
		STATE_BITS - 8 * self.rate()
	}

	/// Length of the digest in bits, the number in the variant's name.
	pub const fn output_bits(self) -> u16 {
		(8 * self.digest_size()) as u16
	}

	/// Selects a variant by its output length in bits.
	pub fn from_output_bits(bits: u16) -> Result<Self, Error> {
		Self::ALL
			.into_iter()
			.find(|variant| variant.output_bits() == bits)
			.ok_or_else(|| {
				debug!("rejected SHA3 output size of {bits} bits");
				Error::UnknownVariant {bits}
			})
	}
}

impl TryFrom<u16> for Variant {
	type Error = Error;

	fn try_from(bits: u16) -> Result<Self, Error> {
		Self::from_output_bits(bits)
	}
}

impl FromStr for Variant {
	type Err = Error;

	/// Accepts `SHA3-256`, `sha3_256` and the like, ignoring case.
	fn from_str(name: &str) -> Result<Self, Error> {
		let bits = name
			.get(.. 4)
			.filter(|prefix| prefix.eq_ignore_ascii_case("sha3"))
			.and_then(|_| name[4 ..].strip_prefix(['-', '_']))
			.and_then(|bits| bits.parse().ok());

		match bits {
			Some(bits) => Self::from_output_bits(bits).map_err(|_| Error::UnknownVariantName),
			None => {
				debug!("rejected SHA3 variant name {name:?}");
				Err(Error::UnknownVariantName)
			}
		}
	}
}

impl fmt::Display for Variant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SHA3-{}", self.output_bits())
	}
}

/// Returns the digest length in bytes of `variant`.
pub const fn digest_size(variant: Variant) -> usize {
	variant.digest_size()
}

/// Returns the digest length in bytes of the variant with a `bits`-bit output.
pub fn digest_size_for_bits(bits: u16) -> Result<usize, Error> {
	Variant::from_output_bits(bits).map(Variant::digest_size)
}

/// A digest produced by [`Sha3::compute`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Digest {
	bytes: [u8; MAX_DIGEST_SIZE],
	len: usize,
}

impl Digest {
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes[.. self.len]
	}
}

impl Deref for Digest {
	type Target = [u8];

	fn deref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl AsRef<[u8]> for Digest {
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl fmt::LowerHex for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for byte in self.as_bytes() {
			write!(f, "{:02x}", byte)?;
		}

		Ok(())
	}
}

impl fmt::Display for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::LowerHex::fmt(self, f)
	}
}

impl fmt::Debug for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Digest({:x})", self)
	}
}

/// A SHA-3 hash engine for one variant.
///
/// Each call to [`compute`](Self::compute) hashes a whole message, starting
/// from a zeroed state. The engine keeps the state of the last computation
/// until [`reset`](Self::reset) is called or it is dropped.
#[derive(Clone)]
pub struct Sha3 {
	state: State,
	variant: Variant,
}

impl Sha3 {
	pub fn new(variant: Variant) -> Self {
		Self {state: State::new(), variant}
	}

	/// Creates an engine for the variant with a `bits`-bit output.
	pub fn from_output_bits(bits: u16) -> Result<Self, Error> {
		Variant::from_output_bits(bits).map(Self::new)
	}

	pub fn variant(&self) -> Variant {
		self.variant
	}

	/// Zeroes the state, keeping the variant.
	pub fn reset(&mut self) {
		self.state.reset();
	}

	/// Returns the digest of `msg`.
	pub fn compute(&mut self, msg: &[u8]) -> Digest {
		let mut digest = Digest {
			bytes: [0; MAX_DIGEST_SIZE],
			len: self.variant.digest_size(),
		};

		self.hash(msg, &mut digest.bytes[.. digest.len]);

		digest
	}

	/// Writes the digest of `msg` to the start of `out`, returning its length.
	///
	/// Fails without touching the state if `out` is shorter than the digest.
	pub fn compute_into(&mut self, msg: &[u8], out: &mut [u8]) -> Result<usize, Error> {
		let len = self.variant.digest_size();

		if out.len() < len {
			debug!("{} digest needs {} output bytes, got {}", self.variant, len, out.len());
			return Err(Error::OutputTooShort {required: len, actual: out.len()});
		}

		self.hash(msg, &mut out[.. len]);

		Ok(len)
	}

	// `out.len()` must be the digest size
	fn hash(&mut self, msg: &[u8], out: &mut [u8]) {
		let params = self.variant.params();

		self.state.reset();

		let blocks = msg.chunks_exact(params.rate);
		let tail = blocks.remainder();
		let block_count = blocks.len();

		for block in blocks {
			self.absorb_block(block);
		}

		self.absorb_final(tail);
		self.squeeze(out);

		trace!(
			"{} digest of {} bytes, {} full blocks absorbed",
			self.variant,
			msg.len(),
			block_count,
		);
	}

	fn absorb_block(&mut self, block: &[u8]) {
		let params = self.variant.params();

		for (i, word) in block.chunks_exact(8).enumerate() {
			let mut bytes = [0; 8];
			bytes.copy_from_slice(word);

			self.state.xor_lane(i % 5, i / 5, u64::from_le_bytes(bytes));
		}

		keccak_p1600(&mut self.state, params.rounds);
	}

	// pads and absorbs the last, partial block (possibly empty)
	fn absorb_final(&mut self, tail: &[u8]) {
		let params = self.variant.params();
		let mut cursor = Cursor::START;

		for &byte in tail {
			self.state.xor_byte(cursor, byte);
			cursor.advance();
		}

		self.state.xor_byte(cursor, DOMAIN_AND_PAD);
		self.state.xor_byte(Cursor::last_byte_of_lane(params.words_per_block - 1), PAD_END);

		keccak_p1600(&mut self.state, params.rounds);
	}

	// every variant's digest fits in one rate's worth of output
	fn squeeze(&self, out: &mut [u8]) {
		let mut cursor = Cursor::START;

		for byte in out {
			*byte = self.state.byte_at(cursor);
			cursor.advance();
		}
	}
}

#[cfg(feature = "zeroize")]
impl Drop for Sha3 {
	fn drop(&mut self) {
		self.state.reset();
	}
}

#[cfg(feature = "zeroize")]
impl zeroize::ZeroizeOnDrop for Sha3 {}

/// Returns the `variant` digest of `msg`.
pub fn compute(variant: Variant, msg: &[u8]) -> Digest {
	Sha3::new(variant).compute(msg)
}

/// Writes the `variant` digest of `msg` into `out`, returning its length.
pub fn compute_into(variant: Variant, msg: &[u8], out: &mut [u8]) -> Result<usize, Error> {
	Sha3::new(variant).compute_into(msg, out)
}

fn fixed<const N: usize>(variant: Variant, msg: &[u8]) -> [u8; N] {
	debug_assert_eq!(variant.digest_size(), N);

	let mut out = [0; N];
	Sha3::new(variant).hash(msg, &mut out);
	out
}

/// Returns the SHA3-224 digest of the byte slice passed to it.
pub fn sha3_224(msg: &[u8]) -> [u8; 28] {
	fixed(Variant::Sha3_224, msg)
}

/// Returns the SHA3-256 digest of the byte slice passed to it.
pub fn sha3_256(msg: &[u8]) -> [u8; 32] {
	fixed(Variant::Sha3_256, msg)
}

/// Returns the SHA3-384 digest of the byte slice passed to it.
pub fn sha3_384(msg: &[u8]) -> [u8; 48] {
	fixed(Variant::Sha3_384, msg)
}

/// Returns the SHA3-512 digest of the byte slice passed to it.
pub fn sha3_512(msg: &[u8]) -> [u8; 64] {
	fixed(Variant::Sha3_512, msg)
}

#[cfg(test)]
fn format_hash<I: AsRef<[u8]>>(
	hasher: impl FnOnce(&[u8]) -> I,
	input: &[u8],
) -> String {
	hex::encode(hasher(input))
}

#[test]
fn test_empty_inputs() {
	assert_eq!(
		format_hash(sha3_224, b""),
		"6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
	);

	assert_eq!(
		format_hash(sha3_256, b""),
		"a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
	);

	assert_eq!(
		format_hash(sha3_384, b""),
		"0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004",
	);

	assert_eq!(
		format_hash(sha3_512, b""),
		"a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
	);
}

#[test]
fn test_abc() {
	assert_eq!(
		format_hash(sha3_224, b"abc"),
		"e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
	);

	assert_eq!(
		format_hash(sha3_256, b"abc"),
		"3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
	);

	assert_eq!(
		format_hash(sha3_384, b"abc"),
		"ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b298d88cea927ac7f539f1edf228376d25",
	);

	assert_eq!(
		format_hash(sha3_512, b"abc"),
		"b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
	);
}

#[test]
fn test_448_bit_message() {
	assert_eq!(
		format_hash(sha3_256, b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
		"41c0dba2a9d6240849100376a8235e2c82e1b9998a999e21db32dd97496d3376",
	);
}

#[test]
fn engine_matches_free_functions() {
	let msg = b"The quick brown fox jumps over the lazy dog";

	for variant in Variant::ALL {
		let mut engine = Sha3::new(variant);
		assert_eq!(engine.compute(msg), compute(variant, msg));
	}

	assert_eq!(compute(Variant::Sha3_224, msg).as_bytes(), sha3_224(msg));
	assert_eq!(compute(Variant::Sha3_256, msg).as_bytes(), sha3_256(msg));
	assert_eq!(compute(Variant::Sha3_384, msg).as_bytes(), sha3_384(msg));
	assert_eq!(compute(Variant::Sha3_512, msg).as_bytes(), sha3_512(msg));
}

#[test]
fn repeated_and_reset_computations_agree() {
	let msg = [0xa3; 200];

	for variant in Variant::ALL {
		let fresh = compute(variant, &msg);

		let mut engine = Sha3::new(variant);
		assert_eq!(engine.compute(&msg), fresh);
		assert_eq!(engine.compute(&msg), fresh);

		engine.reset();
		assert_eq!(engine.state, State::new());
		assert_eq!(engine.variant(), variant);
		assert_eq!(engine.compute(&msg), fresh);
	}
}

#[test]
fn variant_table() {
	let expected = [
		(Variant::Sha3_224, 28, 144, 18),
		(Variant::Sha3_256, 32, 136, 17),
		(Variant::Sha3_384, 48, 104, 13),
		(Variant::Sha3_512, 64, 72, 9),
	];

	for (variant, digest, rate, words) in expected {
		assert_eq!(variant.digest_size(), digest);
		assert_eq!(digest_size(variant), digest);
		assert_eq!(variant.rate(), rate);
		assert_eq!(variant.words_per_block(), words);
		assert_eq!(variant.rounds(), 24);
		assert_eq!(variant.capacity_bits(), 2 * 8 * digest);
		assert_eq!(compute(variant, b"").len(), digest);
	}
}

#[test]
fn selectors() {
	assert_eq!(Variant::from_output_bits(384), Ok(Variant::Sha3_384));
	assert_eq!(Variant::try_from(224u16), Ok(Variant::Sha3_224));
	assert_eq!(Variant::from_output_bits(160), Err(Error::UnknownVariant {bits: 160}));
	assert!(Sha3::from_output_bits(0).is_err());
	assert_eq!(digest_size_for_bits(512), Ok(64));
	assert_eq!(digest_size_for_bits(1024), Err(Error::UnknownVariant {bits: 1024}));

	assert_eq!("SHA3-256".parse::<Variant>(), Ok(Variant::Sha3_256));
	assert_eq!("sha3_512".parse::<Variant>(), Ok(Variant::Sha3_512));
	assert_eq!("Sha3-224".parse::<Variant>(), Ok(Variant::Sha3_224));
	assert_eq!("SHA3-255".parse::<Variant>(), Err(Error::UnknownVariantName));
	assert_eq!("SHA-256".parse::<Variant>(), Err(Error::UnknownVariantName));
	assert_eq!("sha3".parse::<Variant>(), Err(Error::UnknownVariantName));
	assert_eq!("".parse::<Variant>(), Err(Error::UnknownVariantName));

	for variant in Variant::ALL {
		assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
	}
}

#[test]
fn compute_into_checks_buffer_first() {
	let mut engine = Sha3::new(Variant::Sha3_384);
	engine.compute(b"leftover");
	let before = engine.state;

	let mut short = [0; 47];
	assert_eq!(
		engine.compute_into(b"abc", &mut short),
		Err(Error::OutputTooShort {required: 48, actual: 47}),
	);
	assert_eq!(engine.state, before);
	assert_eq!(short, [0; 47]);

	let mut roomy = [0xff; 64];
	assert_eq!(engine.compute_into(b"abc", &mut roomy), Ok(48));
	assert_eq!(roomy[.. 48], sha3_384(b"abc"));
	assert_eq!(roomy[48 ..], [0xff; 16]);
}

#[test]
fn rate_boundaries() {
	for variant in Variant::ALL {
		let rate = variant.rate();
		let msg = [0x5c; 2 * 144 + 1];

		let digests = [rate - 1, rate, rate + 1].map(|len| compute(variant, &msg[.. len]));

		assert_ne!(digests[0], digests[1]);
		assert_ne!(digests[1], digests[2]);
		assert_ne!(digests[0], digests[2]);
	}
}

#[test]
fn digest_formatting() {
	let digest = compute(Variant::Sha3_224, b"");

	assert_eq!(
		format!("{digest}"),
		"6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
	);
	assert_eq!(format!("{digest:?}"), format!("Digest({digest:x})"));
}
