//! ECB over AES-128 from the RustCrypto `aes` crate, standing in for the
//! external block transform.

use aes::Aes128;
use cipher::generic_array::GenericArray;
use cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use spongecrypt::ecb::{self, Block, BlockCipher, BLOCK_SIZE};
use spongecrypt::Error;

struct Aes(Aes128);

impl Aes {
	fn new(key: &[u8; 16]) -> Self {
		Self(Aes128::new(GenericArray::from_slice(key)))
	}
}

impl BlockCipher for Aes {
	fn encrypt_block(&self, block: &Block) -> Block {
		let mut buf = GenericArray::clone_from_slice(block);
		self.0.encrypt_block(&mut buf);

		let mut out = [0; BLOCK_SIZE];
		out.copy_from_slice(&buf);
		out
	}

	fn decrypt_block(&self, block: &Block) -> Block {
		let mut buf = GenericArray::clone_from_slice(block);
		self.0.decrypt_block(&mut buf);

		let mut out = [0; BLOCK_SIZE];
		out.copy_from_slice(&buf);
		out
	}
}

fn hex_bytes(s: &str) -> Vec<u8> {
	hex::decode(s).expect("hex")
}

#[test]
fn fips197_vector() {
	let key: [u8; 16] = hex_bytes("000102030405060708090a0b0c0d0e0f").try_into().unwrap();
	let aes = Aes::new(&key);

	let plaintext = hex_bytes("00112233445566778899aabbccddeeff");
	let mut ciphertext = [0; 16];

	ecb::encrypt_with(&aes, &plaintext, &mut ciphertext).unwrap();
	assert_eq!(hex::encode(ciphertext), "69c4e0d86a7b0430d8cdb78070b4c55a");

	let mut decrypted = [0; 16];
	ecb::decrypt_with(&aes, &ciphertext, &mut decrypted).unwrap();
	assert_eq!(decrypted[..], plaintext[..]);
}

#[test]
fn repeated_blocks_encrypt_identically() {
	let key: [u8; 16] = hex_bytes("2b7e151628aed2a6abf7158809cf4f3c").try_into().unwrap();
	let aes = Aes::new(&key);

	let block = hex_bytes("3243f6a8885a308d313198a2e0370734");
	let plaintext = [block.clone(), block.clone(), block].concat();
	let mut ciphertext = vec![0; plaintext.len()];

	ecb::encrypt_with(&aes, &plaintext, &mut ciphertext).unwrap();

	for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
		assert_eq!(hex::encode(chunk), "3925841d02dc09fbdc118597196a0b32");
	}
}

#[test]
fn round_trips_with_closures() {
	let aes = Aes::new(b"YELLOW SUBMARINE");

	for blocks in [1, 2, 7, 64] {
		let plaintext: Vec<u8> = (0 .. blocks * BLOCK_SIZE).map(|i| (i % 251) as u8).collect();
		let mut ciphertext = vec![0; plaintext.len()];
		let mut decrypted = vec![0; plaintext.len()];

		ecb::encrypt(&plaintext, &mut ciphertext, |block| aes.encrypt_block(block)).unwrap();
		ecb::decrypt(&ciphertext, &mut decrypted, |block| aes.decrypt_block(block)).unwrap();

		assert_eq!(decrypted, plaintext);
	}
}

#[test]
fn validation_happens_before_any_block() {
	let aes = Aes::new(&[0; 16]);
	let mut out = [0; 32];

	assert_eq!(
		ecb::encrypt_with(&aes, &[0; 33], &mut out),
		Err(Error::InvalidInputLength {len: 33}),
	);
	assert_eq!(
		ecb::decrypt_with(&aes, &[0; 48], &mut out),
		Err(Error::OutputTooShort {required: 48, actual: 32}),
	);
	assert_eq!(out, [0; 32]);
}
