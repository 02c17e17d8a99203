#![cfg(test)]

use super::*;

#[test]
fn test_infallible_clone() {
    let value = String::from("hello");
    assert_eq!(
        value.try_clone().as_deref(),
        Ok("hello"),
        "Infallible impls should duplicate via Clone."
    );

    let mut target = String::from("scratch");
    target
        .try_clone_from(&value)
        .expect("infallible try_clone_from can't fail");
    assert_eq!(target, "hello", "try_clone_from should assign the source value.");

    assert!(
        <String as TryClone>::MOVE_ON_RELOCATE,
        "Infallible impls should keep the bitwise-move relocation default."
    );
}

#[test]
fn test_infallible_default() {
    assert_eq!(
        u32::try_default(),
        Ok(0),
        "Default types should try_default infallibly."
    );
    assert_eq!(Option::<String>::try_default(), Ok(None));
}

#[test]
fn test_structural_impls() {
    assert_eq!(Some(5_u8).try_clone(), Ok(Some(5)));
    assert_eq!(None::<u8>.try_clone(), Ok(None));
    assert_eq!(Box::new(7_i64).try_clone(), Ok(Box::new(7)));
    assert_eq!("slice".try_clone(), Ok("slice"));
}

#[test]
fn test_manual_failure() {
    struct Austere;

    impl TryClone for Austere {
        const MOVE_ON_RELOCATE: bool = false;

        fn try_clone(&self) -> Result<Self, ConstructError> {
            Err(ConstructError::new("refuses duplication"))
        }
    }

    let error = Austere.try_clone().map(|_| ()).unwrap_err();
    assert_eq!(error, ConstructError::new("refuses duplication"));
    assert_eq!(
        error.to_string(),
        "Element construction failed: refuses duplication!",
        "Display should carry the reason through."
    );
    assert!(!Austere::MOVE_ON_RELOCATE);

    let mut target = Austere;
    assert!(
        target.try_clone_from(&Austere).is_err(),
        "The provided try_clone_from should propagate try_clone failures."
    );

    assert_eq!(
        Some(Austere).try_clone().map(|_| ()).unwrap_err(),
        ConstructError::new("refuses duplication"),
        "Option should delegate to the payload's impl."
    );
    assert!(
        !<Option<Austere> as TryClone>::MOVE_ON_RELOCATE,
        "Option should inherit the payload's relocation policy."
    );
}
