mod kv;
pub use kv::KeyValue;

mod env;
pub use env::Env;

mod labels;
pub use labels::Labels;

mod constants;
pub use constants::{
    LABEL_BUNDLE, LABEL_OWNER, LABEL_SERVICE, LABEL_UNIT_NAME, LABEL_UNIT_VERSION,
    LABEL_WORKLOAD, SERVICE_UNIT_WORKLOAD,
};

mod unit;
pub use unit::UnitDescriptor;

mod bundle;
pub use bundle::FileBundle;
