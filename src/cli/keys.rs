use crate::arith::Word;
use crate::error::Result;
use crate::keygen::{generate_keys, KeyPair};
use crate::prime::is_prime;

/// Generate a key pair from `p` and `q`
/// Returns the keys and a warning for each input that is not prime
pub fn generate_key_pair(p: Word, q: Word) -> Result<(KeyPair, Vec<String>)> {
    let keys = generate_keys(p, q)?;

    let mut warnings: Vec<String> = [p, q]
        .into_iter()
        .filter(|&x| !is_prime(x))
        .map(|x| format!("{} is not prime; these keys may not decrypt correctly", x))
        .collect();
    if p == q {
        warnings.push(format!(
            "p and q must differ (both are {}); these keys will not decrypt correctly",
            p
        ));
    }

    Ok((keys, warnings))
}

/// Render keys for the console, as text or as JSON
pub fn render_keys(keys: &KeyPair, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(keys)?)
    } else {
        Ok(keys.to_string())
    }
}
