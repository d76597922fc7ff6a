//! Syntactic validation of content identifiers.
//!
//! Pure and total: malformed input is an ordinary `false`, never a panic,
//! and nothing here touches the network or the index.

/// Minimum decoded CIDv1 length: version byte, codec varint, and at
/// least a multihash code/length pair.
const MIN_CID_V1_BYTES: usize = 4;

const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const BASE32_LOWER: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";
const BASE32_UPPER: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Returns whether `cid` is a syntactically well-formed content
/// identifier.
///
/// Accepts 46-character base58btc CIDv0 (`Qm…`, a bare sha2-256
/// multihash) and multibase-prefixed CIDv1 in base32 (`b`/`B`),
/// base58btc (`z`) or base16 (`f`/`F`). Anything else, including empty
/// strings, wrong alphabets and truncated hashes, is `false`.
pub fn validate(cid: &str) -> bool {
    if cid.len() == 46 && cid.starts_with("Qm") {
        return is_v0_multihash(cid);
    }
    is_v1(cid)
}

fn is_v0_multihash(cid: &str) -> bool {
    match base58_decode(cid) {
        // sha2-256 multihash: code 0x12, digest length 0x20, 32 bytes.
        Some(bytes) => bytes.len() == 34 && bytes[0] == 0x12 && bytes[1] == 0x20,
        None => false,
    }
}

fn is_v1(cid: &str) -> bool {
    let mut chars = cid.chars();
    let Some(prefix) = chars.next() else {
        return false;
    };
    let payload = chars.as_str();

    let decoded = match prefix {
        'b' => base32_decode(payload, BASE32_LOWER),
        'B' => base32_decode(payload, BASE32_UPPER),
        'z' => base58_decode(payload),
        'f' | 'F' => base16_decode(payload),
        _ => None,
    };

    match decoded {
        Some(bytes) => bytes.len() >= MIN_CID_V1_BYTES && bytes[0] == 0x01,
        None => false,
    }
}

fn base58_index(byte: u8) -> Option<u32> {
    BASE58_ALPHABET
        .iter()
        .position(|&c| c == byte)
        .map(|i| i as u32)
}

fn base58_decode(input: &str) -> Option<Vec<u8>> {
    if input.is_empty() {
        return None;
    }

    // Little-endian big-number accumulation, reversed at the end.
    let mut bytes: Vec<u8> = Vec::with_capacity(input.len());
    for byte in input.bytes() {
        let mut carry = base58_index(byte)?;
        for b in bytes.iter_mut() {
            carry += u32::from(*b) * 58;
            *b = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    // Leading '1's encode leading zero bytes.
    let zeros = input.bytes().take_while(|&b| b == b'1').count();
    bytes.extend(std::iter::repeat_n(0u8, zeros));
    bytes.reverse();
    Some(bytes)
}

fn base32_decode(input: &str, alphabet: &[u8; 32]) -> Option<Vec<u8>> {
    if input.is_empty() {
        return None;
    }

    let mut out = Vec::with_capacity(input.len() * 5 / 8);
    let mut buffer = 0u32;
    let mut bits = 0u8;
    for byte in input.bytes() {
        let value = alphabet.iter().position(|&c| c == byte)? as u32;
        buffer = (buffer << 5) | value;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    // Unpadded base32 leaves fewer than 5 bits over, all zero.
    if bits >= 5 || buffer != 0 {
        return None;
    }
    Some(out)
}

fn base16_decode(input: &str) -> Option<Vec<u8>> {
    if input.is_empty() || input.len() % 2 != 0 {
        return None;
    }

    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() / 2);
    for pair in bytes.chunks(2) {
        let hi = hex_value(pair[0])?;
        let lo = hex_value(pair[1])?;
        out.push((hi << 4) | lo);
    }
    Some(out)
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_V0: &str = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";
    const VALID_V1_BASE32: &str =
        "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi";

    #[test]
    fn accepts_a_well_formed_v0_hash() {
        assert!(validate(VALID_V0));
    }

    #[test]
    fn accepts_a_well_formed_v1_base32_cid() {
        assert!(validate(VALID_V1_BASE32));
    }

    #[test]
    fn accepts_v1_base16() {
        // 0x01 (cidv1), 0x70 (dag-pb), sha2-256 multihash prefix + digest.
        let digest = "aa".repeat(32);
        assert!(validate(&format!("f01701220{digest}")));
    }

    #[test]
    fn rejects_the_empty_string() {
        assert!(!validate(""));
    }

    #[test]
    fn rejects_invalid_characters() {
        // '0', 'O', 'I' and 'l' are outside the base58btc alphabet.
        assert!(!validate("Qm0OIl0OIl0OIl0OIl0OIl0OIl0OIl0OIl0OIl0OIl0OIl"));
    }

    #[test]
    fn rejects_a_truncated_hash() {
        let truncated = &VALID_V0[..VALID_V0.len() - 6];
        assert!(!validate(truncated));
    }

    #[test]
    fn rejects_a_v0_shaped_string_without_the_multihash_prefix() {
        // Right length and alphabet, but decodes to 0x12 0x1e…, not the
        // sha2-256 multihash prefix 0x12 0x20.
        let lookalike = format!("Qm{}", "1".repeat(44));
        assert!(!validate(&lookalike));
    }

    #[test]
    fn rejects_unknown_multibase_prefixes() {
        assert!(!validate("xnot-a-cid"));
        assert!(!validate("hello world"));
    }

    #[test]
    fn rejects_a_truncated_v1_cid() {
        assert!(!validate(&VALID_V1_BASE32[..10]));
    }

    #[test]
    fn never_panics_on_arbitrary_unicode() {
        assert!(!validate("Qm🚀🚀🚀"));
        assert!(!validate("b\u{0301}aaaa"));
    }
}
