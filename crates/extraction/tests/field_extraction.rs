//! End-to-end extraction scenarios across fields, languages, and
//! deliberately hostile transcripts.

use voice_form_core::Field;
use voice_form_extraction::{extract_single_field, is_valid_email, normalize};

#[test]
fn spoken_email_is_reconstructed() {
    assert_eq!(
        extract_single_field(
            "my email is john dot smith at gmail dot com",
            Field::Email,
            "en"
        ),
        "john.smith@gmail.com"
    );
}

#[test]
fn corrupted_email_is_repaired() {
    let repaired = extract_single_field("@ther@egmail.com", Field::Email, "en");
    assert_eq!(repaired.matches('@').count(), 1);
    assert!(repaired.ends_with("gmail.com"));
}

#[test]
fn years_of_experience_yields_numeric_text() {
    let value = extract_single_field(
        "I have 5 years of experience",
        Field::YearsOfExperience,
        "en",
    );
    assert_eq!(value, "5");
    assert_eq!(value.parse::<u32>().unwrap(), 5);
}

#[test]
fn candidate_name_after_greeting() {
    assert_eq!(
        extract_single_field("Hi, I am John Smith", Field::CandidateName, "en"),
        "John Smith"
    );
}

#[test]
fn email_without_domain_fails_closed() {
    assert_eq!(extract_single_field("username@", Field::Email, "en"), "");
}

#[test]
fn non_english_transcripts_pass_through_exactly() {
    let transcripts = ["मेरा नाम राहुल है", "  spaced  ", "mixed english और हिंदी"];
    for transcript in transcripts {
        for field in Field::ALL {
            for tag in ["hi", "hindi", "ta", "zz"] {
                assert_eq!(
                    extract_single_field(transcript, field, tag),
                    transcript,
                    "field {field}, tag {tag}"
                );
            }
        }
    }
}

#[test]
fn extraction_is_total_over_hostile_inputs() {
    let transcripts = [
        "",
        " ",
        "@@@@",
        "....",
        "at at at dot dot dot",
        "१२३ ४५६",
        "\u{0}\u{1}control",
        "a very long and rambling transcript that mentions no field value at all \
         but keeps going and going with filler words",
        "名前は田中です",
        "🎙️ emoji noise 🎙️",
    ];
    for transcript in transcripts {
        for field in Field::ALL {
            for tag in ["en", "english", "hi", ""] {
                // must terminate and return text, never panic
                let _ = extract_single_field(transcript, field, tag);
            }
        }
    }
}

#[test]
fn email_results_are_valid_or_empty() {
    let transcripts = [
        "my email is john dot smith at gmail dot com",
        "@ther@egmail.com",
        "username@",
        "reach me add john123 gmail",
        "mail id rahul at the rate yahoo dot co dot in",
        "nothing useful",
        "double@@at.com",
    ];
    for transcript in transcripts {
        let value = extract_single_field(transcript, Field::Email, "en");
        assert!(
            value.is_empty() || is_valid_email(&value),
            "transcript {transcript:?} produced {value:?}"
        );
    }
}

#[test]
fn normalization_is_idempotent() {
    let transcripts = [
        "my email is john dot smith at gmail dot com",
        "JANE underscore DOE at YAHOO dot IN",
        "already@normal.com",
        "plain words only",
        "",
    ];
    for transcript in transcripts {
        let once = normalize(transcript);
        assert_eq!(normalize(&once), once, "transcript: {transcript:?}");
    }
}

#[test]
fn free_text_fields_fall_back_to_transcript() {
    let transcript = "some words that fit no pattern 77!";
    assert_eq!(
        extract_single_field(transcript, Field::CandidateName, "en"),
        transcript
    );
    assert_eq!(
        extract_single_field(transcript, Field::Address, "en"),
        transcript
    );
}

#[test]
fn numeric_field_never_fabricates() {
    assert_eq!(
        extract_single_field("many moons of work", Field::YearsOfExperience, "en"),
        ""
    );
}
