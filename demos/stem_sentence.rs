use std::error::Error;

use polstem::{Stemmer, stem_word, unaccent};

const NO_EXCLUSIONS: &[&str] = &[];

fn main() -> Result<(), Box<dyn Error>> {
    let sentence = "Będą oni mieli okazję zastanowić się nad kierunkami rozwoju własnej kariery";

    // ────────────────────────────────────────────────────────────────
    // One-off calls: accented | unaccented
    // ────────────────────────────────────────────────────────────────
    for word in sentence.split(' ') {
        println!(
            "{word:<12} → {:<10} | {}",
            stem_word(word, false, NO_EXCLUSIONS),
            stem_word(word, true, NO_EXCLUSIONS)
        );
    }

    // ────────────────────────────────────────────────────────────────
    // Reusable stemmer with an exclusion list
    // ────────────────────────────────────────────────────────────────
    let stemmer = Stemmer::builder()
        .unaccented(true)
        .unstemmable(["Kariery", "rozwoju"])
        .build()?;

    let stems: Vec<String> = sentence.split(' ').map(|w| stemmer.stem(w)).collect();
    println!("\nunaccented + exclusions: {}", stems.join(" "));
    // → beda oni miel okazj zastan sie nad kierunk rozwoju wlasn kariery

    println!("\nunaccent: {}", unaccent("Zażółć gęślą jaźń"));
    // → zazolc gesla jazn

    Ok(())
}
