use super::Beat;

fn beat(
    id: i32,
    title: &str,
    producer: &str,
    genre: &str,
    bpm: u32,
    duration: &str,
    price: f64,
    likes: u32,
) -> Beat {
    let slug = title.to_lowercase().replace(' ', "-");
    Beat {
        id,
        title: title.to_string(),
        producer: producer.to_string(),
        genre: genre.to_string(),
        bpm,
        duration: duration.to_string(),
        price,
        image_url: format!("/assets/covers/{}.jpg", slug),
        audio_url: format!("/assets/audio/{}.mp3", slug),
        likes,
        liked: false,
    }
}

/// The catalog the storefront ships with. Purely in memory; likes reset on
/// restart.
pub fn seed_beats() -> Vec<Beat> {
    vec![
        beat(1, "Midnight Drive", "NovaBeatz", "Trap", 140, "3:24", 29.99, 212),
        beat(2, "Velvet Haze", "Makani", "R&B", 92, "3:58", 24.99, 187),
        beat(3, "Cold Summer", "Prod. Arctic", "Drill", 144, "2:47", 34.99, 301),
        beat(4, "Neon Mirage", "Synthora", "Synthwave", 108, "4:12", 19.99, 96),
        beat(5, "Gravel Road", "Dusty Loops", "Boom Bap", 88, "3:05", 22.99, 154),
        beat(6, "Low Tide", "Makani", "Lo-fi", 76, "2:36", 14.99, 243),
        beat(7, "Glass City", "NovaBeatz", "Hyperpop", 160, "2:58", 39.99, 78),
        beat(8, "Ember Waltz", "Herzwerk", "Cinematic", 120, "3:41", 49.99, 132),
    ]
}
