use cipherforge::cache::{content_hash, CacheEntry, DecryptionCache};
use cipherforge::error::CipherForgeError;
use cipherforge::key::SubstitutionKey;
use cipherforge::optimizer::runner::ScoredCandidate;
use std::io::Cursor;

fn candidate(text: &str, score: f32) -> ScoredCandidate {
    ScoredCandidate {
        plaintext: text.to_string(),
        key: SubstitutionKey::from_mapping("BCDEFGHIJKLMNOPQRSTUVWXYZA").unwrap(),
        score,
    }
}

#[test]
fn content_hash_is_deterministic_and_content_addressed() {
    let a = content_hash(b"attack at dawn");
    let b = content_hash(b"attack at dawn");
    let c = content_hash(b"attack at dusk");
    assert_eq!(a, b);
    assert_ne!(a, c);
    // SHA-256, hex encoded.
    assert_eq!(a.len(), 64);
    assert!(a.bytes().all(|b| b.is_ascii_hexdigit()));
}

#[test]
fn put_then_get_returns_an_equal_candidate() {
    let mut cache = DecryptionCache::new();
    let c = candidate("the plain text", -512.25);
    let hash = content_hash(b"cipher bytes");

    assert!(cache.put(&hash, &c));
    let got = cache.get(&hash).unwrap().unwrap();
    assert_eq!(got, c);
}

#[test]
fn get_misses_for_unknown_hash() {
    let cache = DecryptionCache::new();
    assert!(cache.get("no-such-hash").unwrap().is_none());
}

#[test]
fn second_put_does_not_overwrite() {
    let mut cache = DecryptionCache::new();
    let hash = content_hash(b"same bytes");
    let first = candidate("first", -10.0);
    let second = candidate("second", -5.0);

    assert!(cache.put(&hash, &first));
    assert!(!cache.put(&hash, &second));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&hash).unwrap().unwrap().plaintext, "first");
}

#[test]
fn corrupt_mapping_surfaces_as_recoverable_error() {
    let json = r#"{
        "deadbeef": {
            "decrypted_text": "whatever",
            "mapping": "AAAAAAAAAAAAAAAAAAAAAAAAAA",
            "score": -1.0
        }
    }"#;
    let cache = DecryptionCache::from_json_reader(Cursor::new(json)).unwrap();

    match cache.get("deadbeef") {
        Err(CipherForgeError::CorruptCacheEntry { hash, .. }) => assert_eq!(hash, "deadbeef"),
        other => panic!("expected CorruptCacheEntry, got {:?}", other),
    }
}

#[test]
fn corrupt_entry_can_be_repaired() {
    let json = r#"{"cafe": {"decrypted_text": "x", "mapping": "short", "score": 0.0}}"#;
    let mut cache = DecryptionCache::from_json_reader(Cursor::new(json)).unwrap();
    assert!(cache.get("cafe").is_err());

    let fresh = candidate("repaired", -3.5);
    cache.repair("cafe", &fresh);
    assert_eq!(cache.get("cafe").unwrap().unwrap(), fresh);
}

#[test]
fn malformed_file_is_a_json_error() {
    let result = DecryptionCache::from_json_reader(Cursor::new("{not json"));
    assert!(matches!(result, Err(CipherForgeError::Json(_))));
}

#[test]
fn cache_round_trips_through_json() {
    let mut cache = DecryptionCache::new();
    let c = candidate("The hidden message.", -321.5);
    let hash = content_hash(b"original bytes");
    cache.put(&hash, &c);

    let mut buf = Vec::new();
    cache.to_json_writer(&mut buf).unwrap();
    let reloaded = DecryptionCache::from_json_reader(Cursor::new(buf)).unwrap();

    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.get(&hash).unwrap().unwrap(), c);
}

#[test]
fn persisted_record_shape_is_stable() {
    let entry = CacheEntry {
        decrypted_text: "plain".to_string(),
        mapping: "BCDEFGHIJKLMNOPQRSTUVWXYZA".to_string(),
        score: -2.5,
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["decrypted_text"], "plain");
    assert_eq!(json["mapping"], "BCDEFGHIJKLMNOPQRSTUVWXYZA");
    assert_eq!(json["score"], -2.5);
}
