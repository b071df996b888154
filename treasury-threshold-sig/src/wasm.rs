use crate::aggregate::aggregate_signatures;
use crate::encoding::{g1_from_onchain_hex, g1_to_onchain, g2_from_onchain_hex};
use crate::keypair::KeyPair;
use crate::message::{parse_amount, TransferMessage};
use crate::signature::Signature;
use crate::{Error, U256};

use treasury_bn254::DomainTag;
use wasm_bindgen::prelude::*;

fn js_error(error: Error) -> JsValue {
    JsValue::from(error.to_string())
}

fn domain_tag(dst: Option<String>) -> Result<DomainTag, Error> {
    match dst {
        Some(tag) => Ok(DomainTag::new(tag.as_bytes())?),
        None => Ok(DomainTag::default()),
    }
}

fn onchain_hex(signature: &Signature) -> String {
    format!("0x{}", hex::encode(g1_to_onchain(signature.inner())))
}

fn sign_transfer_hex(
    seed: &str,
    recipient: &str,
    amount: &str,
    nonce: u64,
    dst: Option<String>,
) -> Result<String, Error> {
    let keypair = KeyPair::from_hex_seed(seed)?;
    let msg = TransferMessage::new(recipient.parse()?, parse_amount(amount)?, U256::from_u64(nonce));
    let signature = keypair.sign(&domain_tag(dst)?, &msg.encode())?;
    Ok(onchain_hex(&signature))
}

fn aggregate_hex(signatures: &[String], threshold: usize) -> Result<String, Error> {
    let parsed = signatures
        .iter()
        .map(|sig| g1_from_onchain_hex(sig).map(Signature::new))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(onchain_hex(&aggregate_signatures(&parsed, threshold)?))
}

fn verify_hex(msg: &str, pubkey: &str, signature: &str, dst: Option<String>) -> Result<bool, Error> {
    let msg = hex::decode(msg.trim_start_matches("0x"))
        .map_err(|e| Error::MalformedEncoding(e.to_string()))?;
    let pubkey = g2_from_onchain_hex(pubkey)?;
    let signature = Signature::new(g1_from_onchain_hex(signature)?);
    signature.verify(&domain_tag(dst)?, &msg, &pubkey)
}

/// Signs `(recipient, amount, nonce)` with the key derived from `seed` and
/// returns the signature in its on-chain layout as hex.
#[wasm_bindgen(js_name = signTransfer)]
pub fn sign_transfer(
    seed: String,
    recipient: String,
    amount: String,
    nonce: u64,
    dst: Option<String>,
) -> Result<String, JsValue> {
    sign_transfer_hex(&seed, &recipient, &amount, nonce, dst).map_err(js_error)
}

#[wasm_bindgen(js_name = aggregateSignatures)]
pub fn aggregate_signatures_js(signatures: JsValue, threshold: usize) -> Result<String, JsValue> {
    let signatures: Vec<String> =
        serde_wasm_bindgen::from_value(signatures).map_err(|e| e.to_string())?;
    aggregate_hex(&signatures, threshold).map_err(js_error)
}

#[wasm_bindgen(js_name = verifySignature)]
pub fn verify_signature(
    msg: String,
    pubkey: String,
    signature: String,
    dst: Option<String>,
) -> Result<bool, JsValue> {
    verify_hex(&msg, &pubkey, &signature, dst).map_err(js_error)
}
