use rand::Rng;

/// Alphabet the synthesized content draws from: alphanumerics plus space.
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 ";

/// Produce `length` characters drawn uniformly from the charset.
pub fn random_text_of_length(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let index = rng.gen_range(0..CHARSET.len());
            CHARSET[index] as char
        })
        .collect()
}

/// Produce a text whose length is drawn uniformly from `[min, max]`.
pub fn random_text_in_range(min: usize, max: usize) -> String {
    let length = rand::thread_rng().gen_range(min..=max);
    random_text_of_length(length)
}

pub fn is_in_charset(text: &str) -> bool {
    text.bytes().all(|byte| CHARSET.contains(&byte))
}
