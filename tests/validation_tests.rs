// tests/validation_tests.rs

use chrono::NaiveDate;
use portfolio::{
    error::{FieldErrorKind, FieldErrors},
    models::{
        comma_list,
        education::EducationInput,
        feedback::FeedbackForm,
        profile::{Profile, ProfileInput},
        publication::{Publication, PublicationInput},
        video::{VideoInput, extract_youtube_id},
    },
    utils::validators::{check_extension, validate_resume_file, validate_whatsapp},
};

fn profile_named(name: &str) -> ProfileInput {
    ProfileInput {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

fn first_code(errors: &FieldErrors, field: &str) -> FieldErrorKind {
    errors.get(field).expect("field has errors")[0].code
}

fn feedback(name: &str, email: &str, whatsapp: &str, message: &str) -> FeedbackForm {
    let mut form = FeedbackForm {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        whatsapp: Some(whatsapp.to_string()),
        message: Some(message.to_string()),
    };
    form.normalize();
    form
}

#[test]
fn tags_list_trims_and_drops_blanks() {
    let publication = Publication {
        id: 1,
        title: "Paper".to_string(),
        description: None,
        journal: None,
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        link: None,
        image: None,
        tags: Some("HCI, ICT, ".to_string()),
    };
    assert_eq!(publication.tags_list(), vec!["HCI", "ICT"]);

    assert!(comma_list(Some("")).is_empty());
    assert!(comma_list(None).is_empty());
    assert_eq!(comma_list(Some(" , Rust ,,Go")), vec!["Rust", "Go"]);
}

#[test]
fn youtube_id_handles_both_link_shapes() {
    assert_eq!(
        extract_youtube_id("https://youtu.be/abc123").as_deref(),
        Some("abc123")
    );
    assert_eq!(
        extract_youtube_id("https://youtube.com/watch?v=xyz_9").as_deref(),
        Some("xyz_9")
    );
    assert_eq!(
        extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42").as_deref(),
        Some("dQw4w9WgXcQ")
    );
    assert_eq!(extract_youtube_id("https://example.com"), None);
    assert_eq!(extract_youtube_id("https://vimeo.com/12345"), None);
}

#[test]
fn social_urls_must_use_http_and_expected_domain() {
    let mut input = profile_named("Ada");
    input.twitter = Some("ftp://twitter.com/ada".to_string());
    input.facebook = Some("https://example.com/ada".to_string());
    input.linkedin = Some("https://www.LinkedIn.com/in/ada".to_string());

    let errors = input.clean().unwrap_err();

    assert_eq!(first_code(&errors, "twitter"), FieldErrorKind::InvalidUrl);
    assert_eq!(
        errors.get("twitter").unwrap()[0].message,
        "Twitter URL must start with http:// or https://"
    );
    assert_eq!(
        errors.get("facebook").unwrap()[0].message,
        "Facebook URL must point to facebook.com"
    );
    // Domain match is case-insensitive.
    assert!(!errors.contains("linkedin"));
    assert!(!errors.contains("instagram"));
}

#[test]
fn blank_social_urls_are_accepted() {
    let mut input = profile_named("Ada");
    input.twitter = Some("   ".to_string());
    input.instagram = Some("https://instagram.com/ada".to_string());

    let profile = input.clean().expect("profile is valid");
    assert_eq!(profile.twitter, None);
    assert_eq!(profile.instagram.as_deref(), Some("https://instagram.com/ada"));
}

#[test]
fn profile_requires_a_name() {
    let errors = ProfileInput::default().clean().unwrap_err();
    assert_eq!(first_code(&errors, "name"), FieldErrorKind::MissingRequiredField);
}

#[test]
fn resume_must_be_a_pdf() {
    assert!(validate_resume_file("resumes/cv.pdf").is_ok());
    assert!(validate_resume_file("resumes/CV.PDF").is_ok());
    assert!(validate_resume_file("resumes/cv.docx").is_err());
    assert!(validate_resume_file("resumes/cv").is_err());

    let mut input = profile_named("Ada");
    input.resume = Some("resumes/cv.doc".to_string());
    let errors = input.clean().unwrap_err();
    assert_eq!(first_code(&errors, "resume"), FieldErrorKind::UnsupportedFileType);
}

#[test]
fn extension_check_reports_allowed_list() {
    let err = check_extension("photo.tiff", &["jpg", "png"]).unwrap_err();
    assert_eq!(err.code, "unsupported_file_type");
    assert!(err.message.unwrap().contains("jpg, png"));
}

#[test]
fn whatsapp_pattern() {
    for ok in ["+1", "+12025550123", "+1234567890123"] {
        assert!(validate_whatsapp(ok).is_ok(), "{} should pass", ok);
    }
    for bad in ["+", "12025550123", "+12345678901234", "+1 202", "+12a", "++12"] {
        assert!(validate_whatsapp(bad).is_err(), "{} should fail", bad);
    }
}

#[test]
fn feedback_accepts_valid_submission() {
    let new = feedback("Ann", "ann@example.com", "+12025550123", "Hello!")
        .clean()
        .expect("valid feedback");
    assert_eq!(new.name, "Ann");
    assert_eq!(new.whatsapp.as_deref(), Some("+12025550123"));
}

#[test]
fn feedback_blank_whatsapp_is_optional() {
    let new = feedback(" Ann ", "ann@example.com", "  ", "Hi")
        .clean()
        .expect("valid feedback");
    assert_eq!(new.name, "Ann");
    assert_eq!(new.whatsapp, None);
}

#[test]
fn feedback_reports_each_bad_field() {
    let errors = feedback("", "not-an-email", "0044", "")
        .clean()
        .unwrap_err();

    assert_eq!(first_code(&errors, "name"), FieldErrorKind::MissingRequiredField);
    assert_eq!(first_code(&errors, "email"), FieldErrorKind::InvalidEmail);
    assert_eq!(first_code(&errors, "whatsapp"), FieldErrorKind::InvalidPhoneFormat);
    assert_eq!(first_code(&errors, "message"), FieldErrorKind::MissingRequiredField);
}

#[test]
fn blank_email_is_required_not_invalid() {
    let errors = feedback("Ann", "", "", "Hi").clean().unwrap_err();
    let email_errors = errors.get("email").unwrap();
    assert_eq!(email_errors.len(), 1);
    assert_eq!(email_errors[0].code, FieldErrorKind::MissingRequiredField);
}

#[test]
fn field_errors_serialize_as_field_to_list() {
    let errors = feedback("Ann", "bad", "", "Hi").clean().unwrap_err();
    let json: serde_json::Value = serde_json::from_str(&errors.to_json_string()).unwrap();

    assert_eq!(json["email"][0]["code"], "invalid_email");
    assert_eq!(json["email"][0]["message"], "Enter a valid email address.");
    assert!(json.get("name").is_none());
}

#[test]
fn publication_defaults_date_and_checks_link() {
    let new = PublicationInput {
        title: Some("Paper".to_string()),
        ..Default::default()
    }
    .clean()
    .expect("valid publication");
    assert_eq!(new.date, chrono::Utc::now().date_naive());

    let errors = PublicationInput {
        title: Some("Paper".to_string()),
        link: Some("not a url".to_string()),
        ..Default::default()
    }
    .clean()
    .unwrap_err();
    assert_eq!(first_code(&errors, "link"), FieldErrorKind::InvalidUrl);
}

#[test]
fn title_length_is_limited() {
    let errors = PublicationInput {
        title: Some("x".repeat(256)),
        ..Default::default()
    }
    .clean()
    .unwrap_err();
    assert_eq!(first_code(&errors, "title"), FieldErrorKind::TooLong);
}

#[test]
fn education_end_year_is_optional() {
    let new = EducationInput {
        degree: Some("BSc".to_string()),
        institute: Some("Uni".to_string()),
        start_year: Some(2019),
        end_year: None,
    }
    .clean()
    .expect("valid education");
    assert_eq!(new.end_year, None);

    let errors = EducationInput {
        degree: Some("BSc".to_string()),
        institute: Some("Uni".to_string()),
        start_year: Some(-1),
        end_year: None,
    }
    .clean()
    .unwrap_err();
    assert_eq!(first_code(&errors, "start_year"), FieldErrorKind::OutOfRange);
}

#[test]
fn video_url_is_required() {
    let errors = VideoInput {
        title: Some("Talk".to_string()),
        ..Default::default()
    }
    .clean()
    .unwrap_err();
    assert_eq!(first_code(&errors, "url"), FieldErrorKind::MissingRequiredField);
}

#[test]
fn placeholder_profile_passes_its_own_validation() {
    let placeholder = Profile::placeholder();
    let input = ProfileInput {
        name: Some(placeholder.name.clone()),
        bio: Some(placeholder.bio.clone()),
        twitter: placeholder.twitter.clone(),
        facebook: placeholder.facebook.clone(),
        linkedin: placeholder.linkedin.clone(),
        instagram: placeholder.instagram.clone(),
        ..Default::default()
    };
    assert_eq!(input.clean().unwrap(), placeholder);
}

#[test]
fn validator_codes_serialize_to_the_published_taxonomy() {
    for code in [
        "invalid_url",
        "invalid_email",
        "invalid_phone_format",
        "unsupported_file_type",
        "required",
        "max_length",
        "out_of_range",
        "invalid",
    ] {
        let kind = FieldErrorKind::from_code(code);
        assert_eq!(serde_json::to_value(kind).unwrap(), code);
    }

    // Built-in validator codes fold into the same names.
    assert_eq!(serde_json::to_value(FieldErrorKind::from_code("length")).unwrap(), "max_length");
    assert_eq!(serde_json::to_value(FieldErrorKind::from_code("range")).unwrap(), "out_of_range");
}
