use iban_validator::*;

/// A caller-side string table keyed on the error kind.
fn localized(kind: ErrorKind, lang: &str) -> &'static str {
    match (lang, kind) {
        ("tr", ErrorKind::Empty) => "Lütfen bir IBAN numarası girin",
        ("tr", ErrorKind::InvalidCountry) => "Geçersiz ülke kodu",
        ("tr", ErrorKind::InvalidLength) => "Geçersiz IBAN uzunluğu",
        ("tr", ErrorKind::InvalidFormat) => "IBAN yalnızca harf ve rakam içerebilir",
        ("tr", ErrorKind::InvalidChecksum) => "Geçersiz IBAN kontrol toplamı",
        (_, ErrorKind::Empty) => "Please enter an IBAN number",
        (_, ErrorKind::InvalidCountry) => "Invalid country code",
        (_, ErrorKind::InvalidLength) => "Invalid IBAN length",
        (_, ErrorKind::InvalidFormat) => "IBAN can only contain letters and numbers",
        (_, ErrorKind::InvalidChecksum) => "Invalid IBAN checksum",
    }
}

fn main() {
    let inputs = [
        "   ",
        "ZZ02TEST0000000000",
        "DE8937040044053201300",
        "DE89370400440532013-00",
        "DE00370400440532013000",
    ];

    // ── 1. Engine messages ─────────────────────────────────────────────
    println!("=== Engine messages ===");
    for input in inputs {
        if let Err(e) = validate(input) {
            println!("  [{}] {:?} -> {}", e.kind(), input, e);
        }
    }

    // ── 2. Structured detail ───────────────────────────────────────────
    println!("\n=== Structured detail ===");
    for input in inputs {
        match validate(input) {
            Err(IbanError::InvalidLength { expected, actual }) => {
                println!("  {input}: need {expected} characters, have {actual}")
            }
            Err(IbanError::InvalidFormat {
                character,
                position,
            }) => println!("  {input}: unexpected {character:?} at {position}"),
            Err(IbanError::InvalidChecksum { remainder }) => {
                println!("  {input}: remainder {remainder}, expected 1")
            }
            _ => {}
        }
    }

    // ── 3. Caller-side localization ────────────────────────────────────
    println!("\n=== Localized (tr) ===");
    for input in inputs {
        if let Err(e) = validate(input) {
            println!("  {}", localized(e.kind(), "tr"));
        }
    }
}
