use alloc::string::ToString;

use crate::audit::{self, AuditError};
use crate::info::ExposureKind;

mod model {
    pub struct Vault {
        pin: u16,
        attempts: u8,
    }

    impl Vault {
        pub fn new() -> Self {
            Vault {
                pin: 1234,
                attempts: 0,
            }
        }
    }

    crate::friends! {
        pub mod friend for Vault {
            field const pin: u16;
            field attempts: u8;
        }
    }
}

use model::{Vault, friend};

#[test]
fn accessors_work_with_any_feature_set() {
    let mut vault = Vault::new();
    *friend::attempts(&mut vault) += 1;
    assert_eq!(*friend::attempts(&vault), 1);
    assert_eq!(*friend::pin(&vault), 1234);
}

#[test]
fn registry_follows_feature() {
    if audit::is_enabled() {
        let info = audit::find("Vault", "pin").unwrap();
        assert_eq!(info.kind, ExposureKind::ConstField);
        assert_eq!(info, &friend::EXPOSURES[0]);

        assert_eq!(audit::of_owner("Vault").count(), 2);
        assert!(audit::count() >= friend::EXPOSURES.len());

        // `A::m_f` is exposed by the method and overload tests.
        let err = audit::find("A", "m_f").unwrap_err();
        assert!(matches!(err, AuditError::Ambiguous { count: 2, .. }));
    } else {
        assert_eq!(audit::count(), 0);
        assert_eq!(audit::of_owner("Vault").count(), 0);
    }

    audit::log_exposures();
}

#[test]
fn missing_exposure() {
    let err = audit::find("Vault", "secret").unwrap_err();
    assert_eq!(
        err,
        AuditError::NotExposed {
            owner: "Vault".to_string(),
            member: "secret".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "`Vault::secret` is not exposed by any registered friend list"
    );
}
