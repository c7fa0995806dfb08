//! Electronic codebook mode: a block transform applied independently to every
//! 16-byte block of a buffer.
//!
//! The block cipher itself is supplied by the caller, either as a closure or
//! through the [`BlockCipher`] trait. There is no chaining, no IV and no
//! padding, so inputs must already be a whole number of blocks.

use log::debug;

use crate::Error;

pub const BLOCK_SIZE: usize = 16;

pub type Block = [u8; BLOCK_SIZE];

/// A 128-bit block cipher with a fixed key.
pub trait BlockCipher {
	fn encrypt_block(&self, block: &Block) -> Block;
	fn decrypt_block(&self, block: &Block) -> Block;
}

fn check_lengths(input: &[u8], output: &[u8]) -> Result<(), Error> {
	if input.is_empty() || input.len() % BLOCK_SIZE != 0 {
		debug!("rejected ECB input of {} bytes", input.len());
		return Err(Error::InvalidInputLength {len: input.len()});
	}

	if output.len() < input.len() {
		debug!("rejected ECB output of {} bytes for {} input bytes", output.len(), input.len());
		return Err(Error::OutputTooShort {required: input.len(), actual: output.len()});
	}

	Ok(())
}

fn apply(
	input: &[u8],
	output: &mut [u8],
	mut transform: impl FnMut(&Block) -> Block,
) -> Result<(), Error> {
	check_lengths(input, output)?;

	for (block_in, block_out) in input.chunks_exact(BLOCK_SIZE).zip(output.chunks_exact_mut(BLOCK_SIZE)) {
		let mut block = [0; BLOCK_SIZE];
		block.copy_from_slice(block_in);

		block_out.copy_from_slice(&transform(&block));
	}

	Ok(())
}

/// Encrypts `plaintext` into the start of `ciphertext` one block at a time.
///
/// `plaintext` must be a non-zero multiple of [`BLOCK_SIZE`] long and
/// `ciphertext` at least as long. Nothing is encrypted if either check fails.
pub fn encrypt(
	plaintext: &[u8],
	ciphertext: &mut [u8],
	encrypt_block: impl FnMut(&Block) -> Block,
) -> Result<(), Error> {
	apply(plaintext, ciphertext, encrypt_block)
}

/// Decrypts `ciphertext` into the start of `plaintext` one block at a time.
///
/// The length rules are the same as for [`encrypt`].
pub fn decrypt(
	ciphertext: &[u8],
	plaintext: &mut [u8],
	decrypt_block: impl FnMut(&Block) -> Block,
) -> Result<(), Error> {
	apply(ciphertext, plaintext, decrypt_block)
}

pub fn encrypt_with<C: BlockCipher + ?Sized>(
	cipher: &C,
	plaintext: &[u8],
	ciphertext: &mut [u8],
) -> Result<(), Error> {
	encrypt(plaintext, ciphertext, |block| cipher.encrypt_block(block))
}

pub fn decrypt_with<C: BlockCipher + ?Sized>(
	cipher: &C,
	ciphertext: &[u8],
	plaintext: &mut [u8],
) -> Result<(), Error> {
	decrypt(ciphertext, plaintext, |block| cipher.decrypt_block(block))
}

// toy cipher: XOR with the key, then rotate the block by one byte
#[cfg(test)]
struct XorRotate(Block);

#[cfg(test)]
impl BlockCipher for XorRotate {
	fn encrypt_block(&self, block: &Block) -> Block {
		let mut out: Block = core::array::from_fn(|i| block[i] ^ self.0[i]);
		out.rotate_left(1);
		out
	}

	fn decrypt_block(&self, block: &Block) -> Block {
		let mut out = *block;
		out.rotate_right(1);
		core::array::from_fn(|i| out[i] ^ self.0[i])
	}
}

#[test]
fn round_trip() {
	let cipher = XorRotate(*b"sixteen byte key");

	for blocks in 1 .. 6 {
		let plaintext: Vec<u8> = (0 .. blocks * BLOCK_SIZE).map(|i| (i * 7) as u8).collect();
		let mut ciphertext = vec![0; plaintext.len()];
		let mut decrypted = vec![0; plaintext.len()];

		encrypt_with(&cipher, &plaintext, &mut ciphertext).unwrap();
		assert_ne!(ciphertext, plaintext);

		decrypt_with(&cipher, &ciphertext, &mut decrypted).unwrap();
		assert_eq!(decrypted, plaintext);
	}
}

#[test]
fn blocks_are_independent() {
	let cipher = XorRotate([0x5a; BLOCK_SIZE]);
	let plaintext = [0x11; 3 * BLOCK_SIZE];
	let mut ciphertext = [0; 3 * BLOCK_SIZE];

	encrypt_with(&cipher, &plaintext, &mut ciphertext).unwrap();

	let first = &ciphertext[.. BLOCK_SIZE];
	assert!(ciphertext.chunks_exact(BLOCK_SIZE).all(|block| block == first));
}

#[test]
fn rejects_bad_lengths_without_calling_transform() {
	let mut calls = 0;
	let mut counting = |block: &Block| {
		calls += 1;
		*block
	};

	let mut out = [0xee; 64];

	assert_eq!(
		encrypt(&[], &mut out, &mut counting),
		Err(Error::InvalidInputLength {len: 0}),
	);
	assert_eq!(
		encrypt(&[0; 17], &mut out, &mut counting),
		Err(Error::InvalidInputLength {len: 17}),
	);
	assert_eq!(
		decrypt(&[0; 15], &mut out, &mut counting),
		Err(Error::InvalidInputLength {len: 15}),
	);
	assert_eq!(
		encrypt(&[0; 48], &mut out[.. 32], &mut counting),
		Err(Error::OutputTooShort {required: 48, actual: 32}),
	);
	assert_eq!(
		decrypt(&[0; 80], &mut out, &mut counting),
		Err(Error::OutputTooShort {required: 80, actual: 64}),
	);

	assert_eq!(calls, 0);
	assert_eq!(out, [0xee; 64]);
}

#[test]
fn leaves_spare_output_untouched() {
	let mut calls = 0;
	let mut out = [0xee; 40];

	encrypt(&[0x01; 32], &mut out, |block| {
		calls += 1;
		block.map(|byte| byte + 1)
	}).unwrap();

	assert_eq!(calls, 2);
	assert_eq!(out[.. 32], [0x02; 32]);
	assert_eq!(out[32 ..], [0xee; 8]);
}
