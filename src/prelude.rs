pub(crate) use seed::prelude::*;
