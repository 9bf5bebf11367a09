/// Constants used by code generation tables and sentinel fallbacks.
pub mod codes {
    /// Category label to two-letter code prefix, scanned in order.
    /// Closed table; anything not listed maps to [`CATEGORY_FALLBACK`].
    pub const CATEGORY_CODES: &[(&str, &str)] = &[
        ("โคมไฟระย้า", "AA"),
        ("โคมไฟติดผนัง", "WL"),
        ("โคมไฟตั้งโต๊ะ", "TL"),
        ("โคมไฟตั้งพื้น", "FL"),
        ("โคมไฟเพดาน", "CL"),
        ("โคมไฟห้อย", "PL"),
        ("อื่นๆ", "OT"),
    ];
    /// Code used for unrecognized or empty category labels.
    pub const CATEGORY_FALLBACK: &str = "OT";

    /// Color label to three-letter code, scanned in order with
    /// first-match-wins substring semantics. Order is significant:
    /// `ทอง` (gold) is listed before `ทองแดง` (copper) and therefore
    /// shadows it; keep this a slice, never a hash map.
    pub const COLOR_CODES: &[(&str, &str)] = &[
        ("ทอง", "GLD"),
        ("เงิน", "SLV"),
        ("ดำ", "BLK"),
        ("ขาว", "WHT"),
        ("เทา", "GRY"),
        ("น้ำตาล", "BRN"),
        ("ชมพู", "PNK"),
        ("เขียว", "GRN"),
        ("น้ำเงิน", "BLU"),
        ("แดง", "RED"),
        ("ครีม", "CRM"),
        ("โครเมี่ยม", "CHR"),
        ("ทองแดง", "CPR"),
        ("โรสโกลด์", "RGD"),
        ("แชมเปญ", "CHP"),
    ];
    /// Sentinel code for an empty or absent color field.
    pub const COLOR_UNKNOWN: &str = "XXX";
    /// Number of characters kept when falling back to the raw color phrase.
    pub const COLOR_PREFIX_LEN: usize = 3;

    /// Model-number segment used when the base code carries no digits.
    pub const MODEL_FALLBACK: &str = "000";
    /// Dimension segment used for empty or unparsable dimension values.
    pub const DIMENSION_FALLBACK: &str = "00";
    /// Minimum width of a dimension segment (left zero-padded).
    pub const DIMENSION_MIN_WIDTH: usize = 2;
}

/// Constants used by the batch driver and report artifacts.
pub mod report {
    /// A progress event is emitted every this many converted records.
    pub const PROGRESS_INTERVAL: usize = 50;
    /// Separator joining raw length/width/height into the summary string.
    pub const DIMENSION_SEPARATOR: char = 'x';
    /// Number of report entries shown in the post-run preview table.
    pub const PREVIEW_LEN: usize = 5;
    /// CSV header row, Thai column names plus a trailing price
    /// placeholder column filled in manually after export.
    pub const CSV_HEADER: &[&str] = &[
        "ลำดับ",
        "รหัสเดิม",
        "รหัสใหม่",
        "ประเภท",
        "สี",
        "ยาว",
        "กว้าง",
        "สูง",
        "ราคา",
    ];
    /// Byte-order mark prefixed to CSV output so spreadsheet tools
    /// detect UTF-8 and render Thai text correctly.
    pub const UTF8_BOM: &str = "\u{feff}";
}

/// Default file names shared by the binaries.
pub mod files {
    /// Default input product collection.
    pub const DEFAULT_INPUT: &str = "products_data_v2.json";
    /// Default converted product collection.
    pub const DEFAULT_OUTPUT: &str = "products_data_v3.json";
    /// Default JSON conversion report.
    pub const DEFAULT_REPORT: &str = "conversion_report.json";
    /// Default CSV rendering of the conversion report.
    pub const DEFAULT_CSV: &str = "conversion_report.csv";
}
