//! Wire codec for the persisted `user` entry.
//!
//! The record travels as URL-encoded JSON, matching the browser-cookie
//! medium it models. Decoding never fails the caller: malformed data is
//! logged and treated as "no user record available".

use crate::user::SessionUser;

/// Encode a user record as URL-encoded JSON.
pub fn encode_user_cookie(user: &SessionUser) -> String {
    let json = serde_json::to_string(user).unwrap_or_default();
    percent_encode(&json)
}

/// Decode a URL-encoded JSON user record.
///
/// Malformed input downgrades silently to `None`.
pub fn decode_user_cookie(value: &str) -> Option<SessionUser> {
    let json = percent_decode(value);
    match serde_json::from_str(&json) {
        Ok(user) => Some(user),
        Err(err) => {
            tracing::warn!(%err, "malformed user entry in session store");
            None
        }
    }
}

fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

fn percent_decode(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut iter = s.bytes();

    while let Some(b) = iter.next() {
        if b == b'%' {
            let hi = iter.next();
            let lo = iter.next();
            let decoded = match (hi, lo) {
                (Some(hi), Some(lo)) => std::str::from_utf8(&[hi, lo])
                    .ok()
                    .and_then(|h| u8::from_str_radix(h, 16).ok()),
                _ => None,
            };
            match decoded {
                Some(byte) => bytes.push(byte),
                None => {
                    bytes.push(b'%');
                    bytes.extend(hi);
                    bytes.extend(lo);
                }
            }
        } else {
            bytes.push(b);
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}
