use super::utils::rsa_key;
use jaws::{
    EcdsaKey, HmacKey, JWA, JWK, JWKEc, JWKEllipticCurves, JWKRsa, JWKSet, JWKType,
    dep::rsa::traits::PublicKeyParts,
    error::{InvalidArgument, InvalidOperation, KeyImportError},
};
use tokio_test::assert_err;

#[test]
fn polymorphic_dispatch() {
    let keys: Vec<JWK> = serde_json::from_str(
        r#"[{"kty":"RSA"},{"kty":"EC"},{"kty":"oct"},{"kty":"bogus","x":"unchanged"}]"#,
    )
    .unwrap();

    assert!(matches!(keys[0], JWK::RSA(_)));
    assert!(matches!(keys[1], JWK::EC(_)));
    assert!(matches!(keys[2], JWK::OCT(_)));
    assert!(matches!(keys[3], JWK::Other(_)));
    assert_eq!(keys[3].key_type_str(), "bogus");
    assert_eq!(
        serde_json::to_value(&keys[3]).unwrap(),
        serde_json::json!({"kty":"bogus","x":"unchanged"})
    );
}

#[test]
fn key_type_lock() {
    let mut jwk = JWK::from(JWKEc::new());
    let err = assert_err!(jwk.try_set_key_type("RSA"));
    let err = err.downcast_ref::<InvalidArgument>().unwrap();
    assert_eq!(err.parameter(), "kty");
    assert_eq!(err.value(), "RSA");
    assert_eq!(jwk.key_type(), JWKType::EC);
}

#[test]
fn rsa_public_export_import_identity() {
    let key = rsa_key();
    let jwk = JWK::from(&key.to_public_key());

    let json = serde_json::to_string(&jwk).unwrap();
    let JWK::RSA(received) = serde_json::from_str::<JWK>(&json).unwrap() else {
        panic!("expected an RSA key");
    };
    let imported = received.to_public_key().unwrap();
    assert_eq!(imported.n(), key.n());
    assert_eq!(imported.e(), key.e());
}

#[test]
fn rsa_private_import_names_missing_parameter() {
    let exported = JWKRsa::from_private_key(rsa_key(), true);
    let json = serde_json::to_value(&exported).unwrap();
    for parameter in ["d", "p", "q"] {
        let mut object = json.as_object().unwrap().clone();
        object.remove(parameter);
        let jwk: JWKRsa = serde_json::from_value(object.into()).unwrap();

        let err = assert_err!(jwk.to_private_key());
        let err = err.downcast_ref::<KeyImportError>().unwrap();
        assert_eq!(err.parameter(), Some(parameter));
    }

    let imported = exported.to_private_key().unwrap();
    assert_eq!(&imported, rsa_key());
}

#[test]
fn ec_private_key_through_json() {
    let key = EcdsaKey::generate(JWKEllipticCurves::P521).unwrap();
    let json = serde_json::to_string(&JWK::from(key.export_jwk(true).unwrap())).unwrap();

    let JWK::EC(received) = serde_json::from_str::<JWK>(&json).unwrap() else {
        panic!("expected an EC key");
    };
    assert_eq!(received.curve(), Some(JWKEllipticCurves::P521));
    let imported = EcdsaKey::from_jwk(&received).unwrap();
    assert_eq!(imported.create_jwk(), key.create_jwk());
}

#[test]
fn ec_curve_names_are_exact() {
    let err = assert_err!(serde_json::from_str::<JWK>(
        r#"{"kty":"EC","crv":"P-257","x":"AQAB","y":"AQAB"}"#
    ));
    assert!(err.to_string().contains("P-257"));
}

#[test]
fn public_projection_and_thumbprint() {
    let key = EcdsaKey::generate(JWKEllipticCurves::P256).unwrap();
    let private = JWK::from(key.export_jwk(true).unwrap());
    let public = private.to_public().unwrap();
    assert_eq!(public, JWK::from(key.create_jwk()));

    // thumbprints only cover the public members
    assert_eq!(
        private.thumb_sha256().unwrap().as_ref(),
        public.thumb_sha256().unwrap().as_ref()
    );

    let secret = JWK::from(HmacKey::generate(JWA::HS256).unwrap().export_jwk());
    let err = assert_err!(secret.to_public());
    assert!(err.is::<InvalidOperation>());
}

#[test]
fn key_set_lookup() {
    let set: JWKSet = serde_json::from_str(
        r#"{"keys":[
            {"kty":"EC","crv":"P-256","x":"MKBCTNIcKUSDii11ySs3526iDZ8AiTo7Tu6KPAqv7D4","y":"4Etl6SRW2YiLUrN5vfvVHuhp7x8PxltmWWlbbM4IFyM","use":"enc","kid":"1"},
            {"kty":"oct","k":"AyM1SysPpbyDfgZld3umj1qzKObwVMkoqQ","kid":"2"},
            {"kty":"OKP","crv":"Ed25519","x":"11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURo","kid":"3"}
        ]}"#,
    )
    .unwrap();

    assert_eq!(set.keys.len(), 3);
    assert!(matches!(set.find("1"), Some(JWK::EC(_))));
    assert!(matches!(set.find("2"), Some(JWK::OCT(_))));
    assert_eq!(set.find("3").map(JWK::key_type_str), Some("OKP"));
    assert!(set.find("4").is_none());
}
