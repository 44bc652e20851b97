/*! CAIL2018 case records.

[RawCase] mirrors one line of the source dataset, [NormalizedCase] is the
flattened entry written to the corpus, with a synthesized [full_text]
blob for downstream embedding/indexing.

[full_text]: NormalizedCase::full_text
!*/
use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;

/// One case entry as found in the dataset, one JSON object per line.
///
/// Every field is optional in the wild, so everything defaults.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct RawCase {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub case_id: String,
    #[serde(default)]
    pub fact: String,
    #[serde(default)]
    pub meta: CaseMeta,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct CaseMeta {
    #[serde(default)]
    pub criminals: Vec<String>,
    #[serde(default)]
    pub accusation: Vec<String>,
    #[serde(default)]
    pub relevant_articles: Vec<String>,
    #[serde(default)]
    pub term_of_imprisonment: TermOfImprisonment,
    #[serde(default)]
    pub punish_of_money: i64,
}

/// The dataset uses sentinel month counts for life/death sentences,
/// hence the signed type.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct TermOfImprisonment {
    #[serde(default)]
    pub imprisonment: i64,
}

/// A flattened case record. Field order is the serialization order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NormalizedCase {
    pub id: String,
    pub case_id: String,
    pub fact: String,
    pub criminals: Vec<String>,
    pub accusation: Vec<String>,
    pub articles: Vec<String>,
    pub imprisonment: i64,
    pub punish_of_money: i64,
    pub full_text: String,
}

impl From<RawCase> for NormalizedCase {
    fn from(raw: RawCase) -> Self {
        let fact = clean_fact(&raw.fact);
        let meta = raw.meta;
        let full_text = full_text(
            &fact,
            &meta.criminals,
            &meta.accusation,
            &meta.relevant_articles,
            meta.term_of_imprisonment.imprisonment,
        );

        NormalizedCase {
            id: raw.id,
            case_id: raw.case_id,
            fact,
            criminals: meta.criminals,
            accusation: meta.accusation,
            articles: meta.relevant_articles,
            imprisonment: meta.term_of_imprisonment.imprisonment,
            punish_of_money: meta.punish_of_money,
            full_text,
        }
    }
}

/// Collapses CRLF sequences (then stray CR/LF) into single spaces and trims.
fn clean_fact(fact: &str) -> String {
    fact.replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .trim()
        .to_string()
}

/// Builds the composite description used for vectorization.
///
/// The sentence segment is omitted entirely when there is no
/// imprisonment term.
fn full_text(
    fact: &str,
    criminals: &[String],
    accusation: &[String],
    articles: &[String],
    imprisonment: i64,
) -> String {
    let mut segments = vec![
        format!("Case facts: {}", fact),
        format!("Defendants: {}", criminals.iter().join(", ")),
        format!("Charges: {}", accusation.iter().join(", ")),
        format!("Relevant statutes: {}", articles.iter().join(", ")),
    ];

    if imprisonment > 0 {
        segments.push(format!("Sentence: {}", format_term(imprisonment)));
    }

    segments.join("\n").trim().to_string()
}

fn format_term(months: i64) -> String {
    let years = months / 12;
    let remainder = months % 12;
    if years > 0 {
        format!("{} years {} months", years, remainder)
    } else {
        format!("{} months", months)
    }
}
