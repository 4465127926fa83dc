//! Frozen vectors for every cipher's public API.
//!
//! Each expected value is a known-good output; any change indicates a
//! behavioural regression.
//!
//! Coverage:
//! - substitution: Affine, Caesar, ROT13, Atbash, Vigenère, Beaufort,
//!   Gronsfeld, Running Key, Vernam
//! - transposition: Columnar, Rail Fence
//! - fractionating: Bifid, Playfair
//! - codes: Baconian, Morse
//! - `polybius::PolybiusTable`, `digraph::split`

use classical_ciphers::codes::baconian::LookupTable;
use classical_ciphers::digraph;
use classical_ciphers::polybius::PolybiusTable;
use classical_ciphers::{
    AffineCipher, AtbashCipher, BaconianCipher, BeaufortCipher, BifidCipher, CaesarCipher, Cipher,
    ColumnarTranspositionCipher, GronsfeldCipher, MorseCode, PlayfairCipher, RailFenceCipher,
    Rot13Cipher, RunningKeyCipher, VernamCipher, VigenereCipher,
};

/// Plaintext used by every documented example.
const PLAINTEXT: &str = "ATTACK AT DAWN";

/// Plaintext after case folding.
const NORMALIZED: &str = "attack at dawn";

/// Asserts `encode(PLAINTEXT) == encoded` and `decode(encoded) == decoded`.
fn assert_vector(cipher: &dyn Cipher, encoded: &str, decoded: &str) {
    assert_eq!(cipher.encode(PLAINTEXT).unwrap(), encoded);
    assert_eq!(cipher.decode(encoded).unwrap(), decoded);
}

// ═══════════════════════════════════════════════════════════════════════
// Substitution
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn affine_a3_b5_case_sensitive() {
    let cipher = AffineCipher::new(3, 5, true).unwrap();
    assert_vector(&cipher, "FKKFLJ FK OFTS", PLAINTEXT);
}

#[test]
fn affine_case_insensitive_lowercases() {
    let cipher = AffineCipher::new(3, 5, false).unwrap();
    assert_vector(&cipher, "fkkflj fk ofts", NORMALIZED);
}

#[test]
fn caesar_offset_4() {
    let cipher = CaesarCipher::new(4, true);
    assert_vector(&cipher, "EXXEGO EX HEAR", PLAINTEXT);
}

#[test]
fn rot13_case_sensitive() {
    let cipher = Rot13Cipher::new(true);
    assert_vector(&cipher, "NGGNPX NG QNJA", PLAINTEXT);
}

#[test]
fn atbash() {
    assert_vector(&AtbashCipher, "zggzxp zg wzdm", NORMALIZED);
}

#[test]
fn vigenere_secret() {
    let cipher = VigenereCipher::new("SECRET").unwrap();
    assert_vector(&cipher, "sxvrgd ev htor", NORMALIZED);
}

#[test]
fn beaufort_secret() {
    let cipher = BeaufortCipher::new("SECRET").unwrap();
    assert_vector(&cipher, "iprjyr wr zhej", NORMALIZED);
}

#[test]
fn gronsfeld_69421() {
    let cipher = GronsfeldCipher::new(69421).unwrap();
    assert_vector(&cipher, "fbwbcp du iizo", NORMALIZED);
}

#[test]
fn running_key_five_keywords() {
    let cipher = RunningKeyCipher::new(&["CATS", "ARE", "CUTER", "THAN", "DOGS"], None).unwrap();
    assert_vector(&cipher, "azpbil hz vvnd", NORMALIZED);
}

#[test]
fn vernam_explicit_keystream() {
    let cipher = VernamCipher::new();
    let keystream = "nqfdetozrdxofi";
    let encoded = cipher.encode(PLAINTEXT, keystream).unwrap();
    assert_eq!(encoded, "njydgd zk aobv");
    assert_eq!(cipher.decode(&encoded, keystream).unwrap(), NORMALIZED);
}

// ═══════════════════════════════════════════════════════════════════════
// Transposition
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn columnar_secret() {
    let cipher = ColumnarTranspositionCipher::new("SECRET").unwrap();
    let encoded = cipher.encode("Attack at Dawn").unwrap();
    assert_eq!(encoded, "tt tancD a  A wka ");
    assert_eq!(cipher.decode(&encoded).unwrap(), "Attack at Dawn");
}

#[test]
fn rail_fence_two_rails() {
    let cipher = RailFenceCipher::new(2).unwrap();
    let encoded = cipher.encode("Attack at Dawn").unwrap();
    assert_eq!(encoded, "Atc tDwtaka an");
    assert_eq!(cipher.decode(&encoded).unwrap(), "Attack at Dawn");
}

// ═══════════════════════════════════════════════════════════════════════
// Fractionating
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn bifid_secret() {
    let cipher = BifidCipher::new("SECRET").unwrap();
    assert_vector(&cipher, "aecaby tv ktha", NORMALIZED);
}

#[test]
fn playfair_secret() {
    let cipher = PlayfairCipher::new("SECRET").unwrap();
    assert_vector(&cipher, "gssgdp gs fbvo", NORMALIZED);
}

#[test]
fn polybius_secret_rows() {
    let table = PolybiusTable::build("SECRET").unwrap();
    let rows: Vec<String> = (0..5).map(|r| table.row(r).iter().collect()).collect();
    assert_eq!(rows, ["secrt", "abdfg", "hiklm", "nopqu", "vwxyz"]);
}

#[test]
fn digraph_split_attack_at_dawn() {
    let digraphs = digraph::split(NORMALIZED, 'x');
    assert_eq!(
        digraphs.pairs(),
        &[
            ('a', 't'),
            ('t', 'a'),
            ('c', 'k'),
            ('a', 't'),
            ('d', 'a'),
            ('w', 'n')
        ]
    );
    assert_eq!(digraphs.literals().len(), 2);
    assert_eq!(digraphs.literals().get(6), Some(' '));
    assert_eq!(digraphs.literals().get(9), Some(' '));
}

// ═══════════════════════════════════════════════════════════════════════
// Codes
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn morse_attack_at_dawn() {
    assert_vector(
        &MorseCode,
        ".- - - .- -.-. -.-  .- -  -.. .- .-- -.",
        NORMALIZED,
    );
}

#[test]
fn baconian_classic_table() {
    let cipher = BaconianCipher::new(LookupTable::classic());
    assert_vector(
        &cipher,
        "aaaaabaabbbaabbaaaaaaaabaababa aaaaabaabb aaabbaaaaababbaabbab",
        NORMALIZED,
    );
}
