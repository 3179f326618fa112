// tests/vector_tests.rs
use std::fs;

use classic_ciphers::{dispatch, Operation, Request};
use serde::Deserialize;
use tracing::info;

mod common;

#[derive(Debug, Deserialize)]
struct TestVector {
    algorithm: String,
    key: Option<String>,
    plaintext: String,
    ciphertext: String,
}

fn load_vectors() -> Vec<TestVector> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/vector/data/cipher_vectors.json");
    let json = fs::read_to_string(path).expect("read vector file");
    serde_json::from_str(&json).expect("parse vectors")
}

#[test]
fn test_vectors_encrypt() {
    common::setup();
    for (idx, v) in load_vectors().iter().enumerate() {
        let req = Request::new(Operation::Encrypt, &v.algorithm, &v.plaintext, v.key.as_deref());
        assert_eq!(dispatch(&req).unwrap(), v.ciphertext, "vector {idx}: {v:?}");
    }
}

#[test]
fn test_vectors_decrypt() {
    common::setup();
    let vectors = load_vectors();
    for (idx, v) in vectors.iter().enumerate() {
        let req = Request::new(Operation::Decrypt, &v.algorithm, &v.ciphertext, v.key.as_deref());
        assert_eq!(dispatch(&req).unwrap(), v.plaintext, "vector {idx}: {v:?}");
    }
    info!("checked {} vectors", vectors.len());
}
