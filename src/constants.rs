pub const ALL_VERBS: [&str; 8] = [
    CREATE,
    GET,
    LIST,
    WATCH,
    UPDATE,
    PATCH,
    DELETE,
    DELETECOLLECTION,
];

pub const DEFAULT_VERBS: [&str; 4] = [LIST, CREATE, UPDATE, DELETE];

const GET: &str = "get";
const LIST: &str = "list";
const WATCH: &str = "watch";
const CREATE: &str = "create";
const DELETE: &str = "delete";
const UPDATE: &str = "update";
const PATCH: &str = "patch";
const DELETECOLLECTION: &str = "deletecollection";

pub const NAME_HEADER: &str = "NAME";

pub const ALLOWED_GLYPH: &str = "✔";
pub const DENIED_GLYPH: &str = "✖";
pub const NOT_APPLICABLE_GLYPH: &str = "";
pub const REQUEST_ERROR_GLYPH: &str = "ERR";

/// Narrowest a padded column may be.
pub const COLUMN_MIN_WIDTH: usize = 4;
/// Blank columns between the widest cell of a column and the next column.
pub const COLUMN_PADDING: usize = 2;
