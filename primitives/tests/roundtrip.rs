//! Property tests: every record survives encode then decode unchanged.

use medledger_primitives::{BasicInfo, MedicalRecord, Record};
use proptest::prelude::*;

proptest! {
    #[test]
    fn basic_info_round_trips(
        identity in ".*",
        name in ".*",
        mobile in ".*",
    ) {
        let info = BasicInfo { identity, name, mobile };
        let bytes = info.encode().unwrap();
        prop_assert_eq!(BasicInfo::decode(&bytes).unwrap(), info);
    }

    #[test]
    fn medical_record_round_trips(
        identity in ".*",
        sick_name in ".*",
        drug_names in proptest::collection::vec(".*", 0..8),
    ) {
        let record = MedicalRecord { identity, sick_name, drug_names };
        let bytes = record.encode().unwrap();
        prop_assert_eq!(MedicalRecord::decode(&bytes).unwrap(), record);
    }

    #[test]
    fn encoding_is_stable(identity in ".*", name in ".*", mobile in ".*") {
        let info = BasicInfo { identity, name, mobile };
        prop_assert_eq!(info.encode().unwrap(), info.clone().encode().unwrap());
    }
}
