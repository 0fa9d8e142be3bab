use chrono::Utc;

/// Prefix of generated fallback bus-name suffixes.
pub const NAME_PREFIX: &str = "Mpris_Server_";

const RAND_CHARS: usize = 5;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_";

/// Derive a legal D-Bus well-known-name suffix from a player name.
///
/// Spaces become underscores, characters outside `[A-Za-z0-9_]` are
/// dropped, and a leading digit gets an underscore prefix. When no name is
/// given, or nothing survives sanitization, a randomized
/// [`NAME_PREFIX`]-based name is generated instead.
pub fn bus_name_for(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => sanitize(name),
        _ => random_name(),
    }
}

fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    match cleaned.chars().next() {
        Some(first) if first.is_ascii_digit() => format!("_{cleaned}"),
        Some(_) => cleaned,
        None => random_name(),
    }
}

fn random_name() -> String {
    let now = Utc::now();
    let mut seed =
        u64::from(now.timestamp_subsec_nanos()) ^ (now.timestamp() as u64).rotate_left(32);

    let mut name = String::from(NAME_PREFIX);
    for _ in 0..RAND_CHARS {
        let index = (seed % CHARSET.len() as u64) as usize;
        name.push(char::from(CHARSET[index]));
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    }

    name
}
