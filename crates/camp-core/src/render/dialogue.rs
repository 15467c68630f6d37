//! Language-tagged example dialogue templates.
//!
//! Short spoken-tone examples embedded in each video segment so the
//! generator keeps a consistent voice. One template trio is picked at
//! random per segment from the set matching the session language code;
//! unknown codes fall back to the English set. Content only, no logic:
//! `{brand}` and `{market}` are interpolated into immutable template text.

use rand::Rng;
use rand::seq::SliceRandom;

const HEBREW_TEMPLATES: &[[&str; 3]] = &[
    [
        "\"אוקיי, בדיקה מהירה... מה יש היום בכדורגל?\"",
        "\"וואו, {brand} שם לי הכל מסודר במקום אחד.\"",
        "\"אפשר לעשות את זה בשנייה ולחזור למה שעשיתי.\"",
    ],
    [
        "\"רגע, בוא נראה מה ה-Live Score.\"",
        "\"יפה, האפליקציה כבר עדכנה. {brand} פשוט מהיר.\"",
        "\"טוב, מוכן לחצי השני עכשיו.\"",
    ],
];

const SPANISH_TEMPLATES: &[[&str; 3]] = &[
    [
        "\"A ver, chequeo rápido... qué hay de fútbol hoy en {market}?\"",
        "\"Wow, {brand} me pone todo en un solo lugar.\"",
        "\"Puedo hacer esto en segundos y volver a lo que estaba haciendo.\"",
    ],
    [
        "\"Espera, déjame ver el marcador en vivo.\"",
        "\"Buena, la app ya actualizó. {brand} nunca duerme.\"",
        "\"Listo, ya estoy para el segundo tiempo.\"",
    ],
];

const ENGLISH_TEMPLATES: &[[&str; 3]] = &[
    [
        "\"Ok, quick check... what are today's matches in {market}?\"",
        "\"Wow, {brand} has everything in one place.\"",
        "\"I can do this in a few seconds and get back to what I was doing.\"",
    ],
    [
        "\"Hold on, let me see the live score.\"",
        "\"Nice, the app updated already. {brand} never sleeps.\"",
        "\"Alright, I am ready for the second half now.\"",
    ],
];

fn templates_for(language_code: &str) -> &'static [[&'static str; 3]] {
    match language_code.to_uppercase().as_str() {
        "HE" => HEBREW_TEMPLATES,
        code if code.contains("ES") => SPANISH_TEMPLATES,
        _ => ENGLISH_TEMPLATES,
    }
}

/// Picks one example dialogue trio for the given language, with brand and
/// market interpolated.
pub fn example_dialogue<R: Rng>(
    language_code: &str,
    market: &str,
    brand: &str,
    rng: &mut R,
) -> Vec<String> {
    let set = templates_for(language_code);
    // Sets are non-empty by construction
    let trio = set.choose(rng).unwrap_or(&set[0]);
    trio.iter()
        .map(|line| line.replace("{brand}", brand).replace("{market}", market))
        .collect()
}
