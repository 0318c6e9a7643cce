use lazy_static::lazy_static;
use std::collections::HashMap;

/// Displayed for unknown countries.
pub const WHITE_FLAG: &str = "🏳️";

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

lazy_static! {
    // Lower-case country names and common aliases
    static ref ISO_CODES_BY_COUNTRY_NAME: HashMap<&'static str, &'static str> = [
        // Europe
        ("albania", "AL"), ("andorra", "AD"), ("austria", "AT"), ("belarus", "BY"),
        ("belgium", "BE"), ("bosnia and herzegovina", "BA"), ("bulgaria", "BG"),
        ("croatia", "HR"), ("cyprus", "CY"), ("czech republic", "CZ"), ("czechia", "CZ"),
        ("denmark", "DK"), ("estonia", "EE"), ("finland", "FI"), ("france", "FR"),
        ("germany", "DE"), ("greece", "GR"), ("hungary", "HU"), ("iceland", "IS"),
        ("ireland", "IE"), ("italy", "IT"), ("kosovo", "XK"), ("latvia", "LV"),
        ("liechtenstein", "LI"), ("lithuania", "LT"), ("luxembourg", "LU"),
        ("malta", "MT"), ("moldova", "MD"), ("monaco", "MC"), ("montenegro", "ME"),
        ("netherlands", "NL"), ("the netherlands", "NL"), ("holland", "NL"),
        ("north macedonia", "MK"), ("macedonia", "MK"),
        ("norway", "NO"), ("poland", "PL"), ("portugal", "PT"), ("romania", "RO"),
        ("russia", "RU"), ("san marino", "SM"), ("serbia", "RS"), ("slovakia", "SK"),
        ("slovenia", "SI"), ("spain", "ES"), ("sweden", "SE"), ("switzerland", "CH"),
        ("ukraine", "UA"), ("united kingdom", "GB"), ("uk", "GB"), ("england", "GB"),
        ("scotland", "GB"), ("wales", "GB"), ("northern ireland", "GB"),
        ("vatican city", "VA"), ("vatican", "VA"),
        // Asia
        ("afghanistan", "AF"), ("armenia", "AM"), ("azerbaijan", "AZ"), ("bahrain", "BH"),
        ("bangladesh", "BD"), ("bhutan", "BT"), ("brunei", "BN"), ("cambodia", "KH"),
        ("china", "CN"), ("georgia", "GE"), ("hong kong", "HK"), ("india", "IN"),
        ("indonesia", "ID"), ("iran", "IR"), ("iraq", "IQ"), ("israel", "IL"),
        ("japan", "JP"), ("jordan", "JO"), ("kazakhstan", "KZ"), ("kuwait", "KW"),
        ("kyrgyzstan", "KG"), ("laos", "LA"), ("lebanon", "LB"), ("macau", "MO"),
        ("malaysia", "MY"), ("maldives", "MV"), ("mongolia", "MN"), ("myanmar", "MM"),
        ("burma", "MM"), ("nepal", "NP"), ("north korea", "KP"), ("oman", "OM"),
        ("pakistan", "PK"), ("palestine", "PS"), ("philippines", "PH"), ("qatar", "QA"),
        ("saudi arabia", "SA"), ("singapore", "SG"), ("south korea", "KR"), ("korea", "KR"),
        ("sri lanka", "LK"), ("syria", "SY"), ("taiwan", "TW"), ("tajikistan", "TJ"),
        ("thailand", "TH"), ("timor-leste", "TL"), ("turkey", "TR"), ("türkiye", "TR"),
        ("turkmenistan", "TM"), ("united arab emirates", "AE"), ("uae", "AE"),
        ("uzbekistan", "UZ"), ("vietnam", "VN"), ("yemen", "YE"),
        // Africa
        ("algeria", "DZ"), ("angola", "AO"), ("benin", "BJ"), ("botswana", "BW"),
        ("burkina faso", "BF"), ("burundi", "BI"), ("cameroon", "CM"), ("cape verde", "CV"),
        ("central african republic", "CF"), ("chad", "TD"), ("comoros", "KM"),
        ("congo", "CG"), ("democratic republic of the congo", "CD"), ("djibouti", "DJ"),
        ("egypt", "EG"), ("equatorial guinea", "GQ"), ("eritrea", "ER"), ("ethiopia", "ET"),
        ("gabon", "GA"), ("gambia", "GM"), ("ghana", "GH"), ("guinea", "GN"),
        ("guinea-bissau", "GW"), ("ivory coast", "CI"), ("cote d'ivoire", "CI"),
        ("kenya", "KE"), ("lesotho", "LS"), ("liberia", "LR"), ("libya", "LY"),
        ("madagascar", "MG"), ("malawi", "MW"), ("mali", "ML"), ("mauritania", "MR"),
        ("mauritius", "MU"), ("morocco", "MA"), ("mozambique", "MZ"), ("namibia", "NA"),
        ("niger", "NE"), ("nigeria", "NG"), ("rwanda", "RW"), ("sao tome and principe", "ST"),
        ("senegal", "SN"), ("seychelles", "SC"), ("sierra leone", "SL"), ("somalia", "SO"),
        ("south africa", "ZA"), ("south sudan", "SS"), ("sudan", "SD"), ("swaziland", "SZ"),
        ("eswatini", "SZ"), ("tanzania", "TZ"), ("togo", "TG"), ("tunisia", "TN"),
        ("uganda", "UG"), ("zambia", "ZM"), ("zimbabwe", "ZW"),
        // Americas
        ("antigua and barbuda", "AG"), ("argentina", "AR"), ("bahamas", "BS"),
        ("barbados", "BB"), ("belize", "BZ"), ("bolivia", "BO"), ("brazil", "BR"),
        ("canada", "CA"), ("chile", "CL"), ("colombia", "CO"), ("costa rica", "CR"),
        ("cuba", "CU"), ("dominica", "DM"), ("dominican republic", "DO"), ("ecuador", "EC"),
        ("el salvador", "SV"), ("grenada", "GD"), ("guatemala", "GT"), ("guyana", "GY"),
        ("haiti", "HT"), ("honduras", "HN"), ("jamaica", "JM"), ("mexico", "MX"),
        ("nicaragua", "NI"), ("panama", "PA"), ("paraguay", "PY"), ("peru", "PE"),
        ("saint kitts and nevis", "KN"), ("saint lucia", "LC"),
        ("saint vincent and the grenadines", "VC"), ("suriname", "SR"),
        ("trinidad and tobago", "TT"), ("united states", "US"),
        ("united states of america", "US"), ("usa", "US"), ("us", "US"), ("uruguay", "UY"),
        ("venezuela", "VE"),
        // Oceania
        ("australia", "AU"), ("fiji", "FJ"), ("kiribati", "KI"), ("marshall islands", "MH"),
        ("micronesia", "FM"), ("nauru", "NR"), ("new zealand", "NZ"), ("palau", "PW"),
        ("papua new guinea", "PG"), ("samoa", "WS"), ("solomon islands", "SB"),
        ("tonga", "TO"), ("tuvalu", "TV"), ("vanuatu", "VU"),
    ]
    .into_iter()
    .collect();
}

/// ISO 3166-1 alpha-2 code of a country name.
///
/// Two-letter inputs that are not a known alias like "uk"
/// are considered to be codes already.
pub fn iso_country_code(country_name: &str) -> Option<String> {
    let name = country_name.trim().to_lowercase();
    if let Some(code) = ISO_CODES_BY_COUNTRY_NAME.get(name.as_str()) {
        return Some((*code).to_owned());
    }
    if name.chars().count() == 2 && name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some(name.to_ascii_uppercase());
    }
    None
}

/// Flag emoji of a country or a white flag if the country is unknown.
pub fn country_flag(country_name: Option<&str>) -> String {
    country_name
        .and_then(iso_country_code)
        .and_then(|code| flag_from_iso_code(&code))
        .unwrap_or_else(|| WHITE_FLAG.to_owned())
}

fn flag_from_iso_code(code: &str) -> Option<String> {
    if code.len() != 2 {
        return None;
    }
    code.to_ascii_uppercase()
        .chars()
        .map(|c| {
            debug_assert!(c.is_ascii_uppercase());
            char::from_u32(REGIONAL_INDICATOR_A + (c as u32 - 'A' as u32))
        })
        .collect()
}
