use iban_validator::*;

fn main() {
    // Paper form, electronic form, lower case: all accepted
    for input in [
        "DE89 3704 0044 0532 0130 00",
        "GB82WEST12345698765432",
        "fr14 2004 1010 0505 0001 3m02 606",
    ] {
        match validate(input) {
            Ok(details) => println!(
                "{}  {} {} (check digits {}, {} characters)",
                details.formatted_iban,
                details.country_flag,
                details.country_name,
                details.check_digits,
                details.length
            ),
            Err(e) => println!("{input}: {e}"),
        }
    }

    // Typed, validated IBAN
    let iban: Iban = "NL91 ABNA 0417 1643 00".parse().expect("valid IBAN");
    println!("\nElectronic: {}", iban.as_str());
    println!("BBAN:       {}", iban.bban());
    println!("Country:    {}", iban.country().name);

    // Building an IBAN from its parts
    let digits = compute_check_digits("DE", "370400440532013000").expect("valid BBAN");
    println!("\nGenerated:  {}", format(&format!("DE{digits}370400440532013000")));

    // Example picker
    println!("\n{} supported countries, e.g.:", supported_countries().len());
    for country in supported_countries().iter().take(5) {
        println!("  {} {} ({} characters)", country.flag(), country.name, country.length);
    }
}
