use clique_seguro::{
    analyze, AnalysisResult, DangerReason, CAMOUFLAGE_MESSAGE, KEYWORD_MESSAGE, SAFE_MESSAGE,
    SHORTENER_MESSAGE,
};

fn evidence(result: &AnalysisResult) -> (String, Option<String>) {
    match result {
        AnalysisResult::Danger { evidence, .. } => {
            (evidence.match_text.clone(), evidence.url.clone())
        }
        AnalysisResult::Safe { .. } => panic!("expected a danger verdict, got {result:?}"),
    }
}

#[test]
fn prize_message_is_flagged_by_keyword() {
    let result = analyze("Parabéns, você ganhou um prêmio!");
    assert_eq!(result.reason(), Some(DangerReason::SuspiciousKeyword));
    assert_eq!(result.message(), KEYWORD_MESSAGE);
}

#[test]
fn keywords_match_in_any_case() {
    let result = analyze("VOCÊ TEM UMA DÍVIDA PENDENTE");
    assert_eq!(result.reason(), Some(DangerReason::SuspiciousKeyword));
    assert_eq!(evidence(&result).0, "dívida");
}

#[test]
fn keywords_match_inside_words() {
    let result = analyze("Meu bancoimobiliario chegou");
    assert_eq!(result.reason(), Some(DangerReason::SuspiciousKeyword));
}

#[test]
fn leet_url_is_flagged_as_camouflage() {
    let result = analyze("Olha esse site http://promo-gr4tis.com");
    assert_eq!(result.reason(), Some(DangerReason::CamouflagedUrl));
    assert_eq!(result.message(), CAMOUFLAGE_MESSAGE);
    assert_eq!(
        evidence(&result),
        ("grat".to_string(), Some("http://promo-gr4tis.com".to_string()))
    );
}

#[test]
fn bank_lookalike_is_flagged_as_camouflage() {
    let result = analyze("http://b4nc0-seguro.com");
    assert_eq!(result.reason(), Some(DangerReason::CamouflagedUrl));
    assert_eq!(evidence(&result).0, "banc");
}

#[test]
fn uppercase_url_is_normalized_before_cleaning() {
    let result = analyze("Acesse HTTP://B4NK-L0G1N.COM agora");
    assert_eq!(result.reason(), Some(DangerReason::CamouflagedUrl));
    assert_eq!(
        evidence(&result),
        ("bank".to_string(), Some("http://b4nk-l0g1n.com".to_string()))
    );
}

#[test]
fn symbols_count_as_letters_in_urls() {
    let result = analyze("Entre em https://@c3$$0-r@p!do.net");
    assert_eq!(result.reason(), Some(DangerReason::CamouflagedUrl));
    assert_eq!(evidence(&result).0, "acess");
}

#[test]
fn shortened_link_is_flagged() {
    let result = analyze("Veja: http://bit.ly/abc123");
    assert_eq!(result.reason(), Some(DangerReason::ShortenedUrl));
    assert_eq!(result.message(), SHORTENER_MESSAGE);
    assert_eq!(
        evidence(&result),
        ("bit.ly".to_string(), Some("http://bit.ly/abc123".to_string()))
    );
}

#[test]
fn shortener_domains_match_as_substrings() {
    let result = analyze("Resultado em http://test.com/x");
    assert_eq!(result.reason(), Some(DangerReason::ShortenedUrl));
    assert_eq!(evidence(&result).0, "t.co");
}

#[test]
fn friendly_message_is_safe() {
    let result = analyze("Oi, como você está? Vamos almoçar?");
    assert_eq!(
        result,
        AnalysisResult::Safe {
            message: SAFE_MESSAGE
        }
    );
    assert!(!result.is_danger());
}

#[test]
fn plain_url_is_safe() {
    let result = analyze("Segue o link: https://www.example.org/menu");
    assert_eq!(result.reason(), None);
}

#[test]
fn url_without_scheme_is_not_inspected() {
    let result = analyze("Entre em b4nc0-seguro.com ou bit.ly/abc");
    assert_eq!(result.reason(), None);
}

#[test]
fn keyword_beats_shortener() {
    let result = analyze("Clique aqui para resgatar seu prêmio: http://bit.ly/premio");
    assert_eq!(result.reason(), Some(DangerReason::SuspiciousKeyword));
    assert_eq!(evidence(&result), ("prêmio".to_string(), None));
}

#[test]
fn camouflage_scan_covers_every_url_before_shorteners() {
    let result = analyze("Primeiro http://bit.ly/x depois http://l0gin-c41x4.com");
    assert_eq!(result.reason(), Some(DangerReason::CamouflagedUrl));
    assert_eq!(
        evidence(&result),
        ("login".to_string(), Some("http://l0gin-c41x4.com".to_string()))
    );
}

#[test]
fn first_matching_url_wins() {
    let result = analyze("http://exemplo.org e http://s3nh4.net e http://fr4ud3.net");
    assert_eq!(evidence(&result).1.as_deref(), Some("http://s3nh4.net"));

    let result = analyze("http://tinyurl.com/a http://goo.gl/b");
    assert_eq!(result.reason(), Some(DangerReason::ShortenedUrl));
    assert_eq!(
        evidence(&result),
        ("tinyurl.com".to_string(), Some("http://tinyurl.com/a".to_string()))
    );
}

#[test]
fn repeated_analysis_agrees() {
    for text in [
        "Parabéns, você ganhou um prêmio!",
        "Olha esse site http://promo-gr4tis.com",
        "Veja: http://bit.ly/abc123",
        "Oi, como você está? Vamos almoçar?",
    ] {
        assert_eq!(analyze(text), analyze(text), "differing results for {text:?}");
    }
}

#[test]
fn json_output_is_valid() {
    let danger = serde_json::to_value(analyze("Veja: http://bit.ly/abc123")).unwrap();
    assert_eq!(danger["kind"], "danger");
    assert_eq!(danger["reason"], "shortened_url");
    assert_eq!(danger["message"], SHORTENER_MESSAGE);
    assert_eq!(danger["evidence"]["match"], "bit.ly");
    assert_eq!(danger["evidence"]["url"], "http://bit.ly/abc123");

    let keyword = serde_json::to_value(analyze("sua senha expirou")).unwrap();
    assert!(keyword["evidence"].get("url").is_none());

    let safe = serde_json::to_value(analyze("bom dia")).unwrap();
    assert_eq!(safe["kind"], "safe");
    assert_eq!(safe["message"], SAFE_MESSAGE);
    assert!(safe.get("reason").is_none());
}
