#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tally_core::model::{RegisterRequest, User};

#[test]
fn accepts_complete_payload_and_ignores_extras() {
    let req: RegisterRequest = serde_json::from_str(
        r#"{"fullName":"Ada","favoriteColor":"blue","favoriteSeries":"Foundation","extra":42}"#,
    )
    .unwrap();
    let u = req.validate().unwrap().with_id(1);
    assert_eq!(u.full_name, "Ada");
    assert_eq!(u.favorite_series, "Foundation");
}

#[test]
fn rejects_missing_and_blank_fields() {
    let missing: RegisterRequest =
        serde_json::from_str(r#"{"fullName":"Ada","favoriteColor":"blue"}"#).unwrap();
    let err = missing.validate().expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    assert!(err.to_string().contains("favoriteSeries"));

    let blank: RegisterRequest = serde_json::from_str(
        r#"{"fullName":"   ","favoriteColor":"blue","favoriteSeries":"Dune"}"#,
    )
    .unwrap();
    assert!(blank.validate().is_err());
}

#[test]
fn user_serializes_camel_case() {
    let u = User {
        id: 1,
        full_name: "Ada".into(),
        favorite_color: "blue".into(),
        favorite_series: "Foundation".into(),
    };
    assert_eq!(
        serde_json::to_string(&u).unwrap(),
        r#"{"id":1,"fullName":"Ada","favoriteColor":"blue","favoriteSeries":"Foundation"}"#
    );
}
