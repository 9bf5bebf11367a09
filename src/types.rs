/// Generated composite product code.
/// Example: `TL102-GLD-45-20-00`
pub type ProductCode = String;
/// A single segment of a composite code (color, dimension, or model part).
/// Examples: `GLD`, `45`, `00`, `102`
pub type CodeSegment = String;
/// Human-language product category label as stored in source data.
/// Examples: `โคมไฟตั้งโต๊ะ`, `โคมไฟระย้า`, `อื่นๆ`
pub type CategoryLabel = String;
/// Free-text color description, possibly a comma-separated list.
/// Examples: `ทอง`, `ทอง, แดง`, `สีดำด้าน`
pub type ColorPhrase = String;
