//! Point encodings.
//!
//! Two layouts are in use and are kept apart on purpose:
//!
//! * the on-chain layout consumed by the wallet contract, where every
//!   coordinate is a big-endian `uint256` word and G2 coordinates are written
//!   imaginary part first: `(x_im, x_re, y_im, y_re)`;
//! * the external library layout, which uses the same component order but
//!   stores each 32-byte word byte-reversed (see [`byte_swap`]).
//!
//! The identity is encoded as all zeros in both layouts.

use crate::keypair::PublicKey;
use crate::signature::Signature;
use crate::Error;

use serde::Serialize;
use treasury_bn254::{FieldElement, Fp2, G1Point, G2Point, Modular};

pub const WORD_LEN: usize = 32;
pub const G1_LEN: usize = 2 * WORD_LEN;
pub const G2_LEN: usize = 4 * WORD_LEN;

type Word = [u8; WORD_LEN];

/// Reverses the byte order of a 32-byte word.
pub fn byte_swap(word: Word) -> Word {
    let mut swapped = word;
    swapped.reverse();
    swapped
}

fn write_words(out: &mut [u8], words: &[Word]) {
    for (chunk, word) in out.chunks_exact_mut(WORD_LEN).zip(words) {
        chunk.copy_from_slice(word);
    }
}

fn read_words<const N: usize>(bytes: &[u8]) -> Result<[Word; N], Error> {
    if bytes.len() != N * WORD_LEN {
        return Err(Error::MalformedEncoding(format!(
            "expected {} bytes, got {}",
            N * WORD_LEN,
            bytes.len()
        )));
    }
    let mut words = [[0u8; WORD_LEN]; N];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(WORD_LEN)) {
        word.copy_from_slice(chunk);
    }
    Ok(words)
}

fn field_element(word: &Word) -> Result<FieldElement, Error> {
    FieldElement::from_be_bytes_canonical(word)
        .ok_or_else(|| Error::MalformedEncoding("coordinate is not below the field modulus".to_owned()))
}

fn g1_words(point: &G1Point) -> [Word; 2] {
    match point.affine_coordinates() {
        Some((x, y)) => [x.to_be_bytes(), y.to_be_bytes()],
        None => [[0u8; WORD_LEN]; 2],
    }
}

fn g2_words(point: &G2Point) -> [Word; 4] {
    match point.affine_coordinates() {
        Some((x, y)) => [
            x.imaginary().to_be_bytes(),
            x.real().to_be_bytes(),
            y.imaginary().to_be_bytes(),
            y.real().to_be_bytes(),
        ],
        None => [[0u8; WORD_LEN]; 4],
    }
}

fn g1_from_words(words: &[Word; 2]) -> Result<G1Point, Error> {
    if words.iter().all(|word| word.iter().all(|b| *b == 0)) {
        return Ok(G1Point::IDENTITY);
    }
    let point = G1Point::from_affine(field_element(&words[0])?, field_element(&words[1])?);
    if !point.is_on_curve() {
        return Err(Error::MalformedEncoding("G1 point is not on the curve".to_owned()));
    }
    Ok(point)
}

fn g2_from_words(words: &[Word; 4]) -> Result<G2Point, Error> {
    if words.iter().all(|word| word.iter().all(|b| *b == 0)) {
        return Ok(G2Point::IDENTITY);
    }
    let x = Fp2::new(field_element(&words[1])?, field_element(&words[0])?);
    let y = Fp2::new(field_element(&words[3])?, field_element(&words[2])?);
    let point = G2Point::from_affine(x, y);
    if !point.is_on_curve() {
        return Err(Error::MalformedEncoding("G2 point is not on the curve".to_owned()));
    }
    if !point.is_torsion_free() {
        return Err(Error::MalformedEncoding("G2 point is not in the prime order subgroup".to_owned()));
    }
    Ok(point)
}

/// ABI encoding of `(uint256 x, uint256 y)`.
pub fn g1_to_onchain(point: &G1Point) -> [u8; G1_LEN] {
    let mut out = [0u8; G1_LEN];
    write_words(&mut out, &g1_words(point));
    out
}

pub fn g1_from_onchain(bytes: &[u8]) -> Result<G1Point, Error> {
    g1_from_words(&read_words::<2>(bytes)?)
}

/// ABI encoding of `(x_im, x_re, y_im, y_re)`.
pub fn g2_to_onchain(point: &G2Point) -> [u8; G2_LEN] {
    let mut out = [0u8; G2_LEN];
    write_words(&mut out, &g2_words(point));
    out
}

pub fn g2_from_onchain(bytes: &[u8]) -> Result<G2Point, Error> {
    g2_from_words(&read_words::<4>(bytes)?)
}

fn decode_hex(input: &str) -> Result<Vec<u8>, Error> {
    hex::decode(input.trim_start_matches("0x")).map_err(|e| Error::MalformedEncoding(e.to_string()))
}

pub fn g1_from_onchain_hex(input: &str) -> Result<G1Point, Error> {
    g1_from_onchain(&decode_hex(input)?)
}

pub fn g2_from_onchain_hex(input: &str) -> Result<G2Point, Error> {
    g2_from_onchain(&decode_hex(input)?)
}

pub fn g1_to_external(point: &G1Point) -> [u8; G1_LEN] {
    let mut out = [0u8; G1_LEN];
    write_words(&mut out, &g1_words(point).map(byte_swap));
    out
}

pub fn g1_from_external(bytes: &[u8]) -> Result<G1Point, Error> {
    g1_from_words(&read_words::<2>(bytes)?.map(byte_swap))
}

pub fn g2_to_external(point: &G2Point) -> [u8; G2_LEN] {
    let mut out = [0u8; G2_LEN];
    write_words(&mut out, &g2_words(point).map(byte_swap));
    out
}

pub fn g2_from_external(bytes: &[u8]) -> Result<G2Point, Error> {
    g2_from_words(&read_words::<4>(bytes)?.map(byte_swap))
}

fn hex_word(word: &Word) -> String {
    format!("0x{}", hex::encode(word))
}

/// Arguments of the wallet contract's verification call, as `0x` words.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ContractArgs {
    pub signature: [String; 2],
    #[serde(rename = "pubKey")]
    pub pubkey: [String; 4],
    #[serde(rename = "M")]
    pub message_point: [String; 2],
}

impl ContractArgs {
    pub fn new(pubkey: &PublicKey, message_point: &G1Point, signature: &Signature) -> Self {
        Self {
            signature: g1_words(signature.inner()).map(|w| hex_word(&w)),
            pubkey: g2_words(pubkey).map(|w| hex_word(&w)),
            message_point: g1_words(message_point).map(|w| hex_word(&w)),
        }
    }
}
