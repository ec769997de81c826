//! FILENAME: core/parser/src/functions.rs
//! PURPOSE: Table of spreadsheet function names the parser promotes to calls.
//! CONTEXT: An identifier becomes a Function node only if its uppercased
//! text is listed here AND it is immediately followed by '('. Anything else
//! stays inert leaf text, so unknown or custom names simply render as a
//! leaf followed by a grouping parenthesis.

use once_cell::sync::Lazy;
use std::collections::HashSet;

const KNOWN_FUNCTIONS: &[&str] = &[
    // Math & trigonometry
    "ABS", "ACOS", "ACOSH", "AGGREGATE", "ASIN", "ASINH", "ATAN", "ATAN2", "ATANH",
    "CEILING", "CEILING.MATH", "COMBIN", "COS", "COSH", "DEGREES", "EVEN", "EXP", "FACT",
    "FLOOR", "FLOOR.MATH", "GCD", "INT", "LCM", "LN", "LOG", "LOG10", "MOD", "MROUND",
    "ODD", "PI", "POWER", "PRODUCT", "QUOTIENT", "RADIANS", "RAND", "RANDARRAY",
    "RANDBETWEEN", "ROUND", "ROUNDDOWN", "ROUNDUP", "SEQUENCE", "SIGN", "SIN", "SINH",
    "SQRT", "SUBTOTAL", "SUM", "SUMIF", "SUMIFS", "SUMPRODUCT", "SUMSQ", "TAN", "TANH",
    "TRUNC",
    // Statistical
    "AVERAGE", "AVERAGEA", "AVERAGEIF", "AVERAGEIFS", "CORREL", "COUNT", "COUNTA",
    "COUNTBLANK", "COUNTIF", "COUNTIFS", "FORECAST", "FORECAST.LINEAR", "FREQUENCY",
    "GEOMEAN", "LARGE", "MAX", "MAXA", "MAXIFS", "MEDIAN", "MIN", "MINA", "MINIFS",
    "MODE", "MODE.SNGL", "NORM.DIST", "NORM.INV", "NORM.S.DIST", "PERCENTILE",
    "PERCENTILE.INC", "PERCENTILE.EXC", "QUARTILE", "QUARTILE.INC", "RANK", "RANK.EQ",
    "SLOPE", "SMALL", "STDEV", "STDEV.P", "STDEV.S", "T.TEST", "TREND", "VAR", "VAR.P",
    "VAR.S",
    // Logical
    "AND", "FALSE", "IF", "IFERROR", "IFNA", "IFS", "LAMBDA", "LET", "NOT", "OR",
    "SWITCH", "TRUE", "XOR",
    // Text
    "CHAR", "CLEAN", "CODE", "CONCAT", "CONCATENATE", "DOLLAR", "EXACT", "FIND",
    "FIXED", "LEFT", "LEN", "LOWER", "MID", "NUMBERVALUE", "PROPER", "REPLACE", "REPT",
    "RIGHT", "SEARCH", "SUBSTITUTE", "T", "TEXT", "TEXTAFTER", "TEXTBEFORE", "TEXTJOIN",
    "TEXTSPLIT", "TRIM", "UNICHAR", "UNICODE", "UPPER", "VALUE",
    // Lookup & reference
    "ADDRESS", "AREAS", "CHOOSE", "CHOOSECOLS", "CHOOSEROWS", "COLUMN", "COLUMNS",
    "DROP", "FILTER", "FORMULATEXT", "GETPIVOTDATA", "HLOOKUP", "HSTACK", "HYPERLINK",
    "INDEX", "INDIRECT", "LOOKUP", "MATCH", "OFFSET", "ROW", "ROWS", "SORT", "SORTBY",
    "TAKE", "TOCOL", "TOROW", "TRANSPOSE", "UNIQUE", "VLOOKUP", "VSTACK", "WRAPCOLS",
    "WRAPROWS", "XLOOKUP", "XMATCH",
    // Date & time
    "DATE", "DATEDIF", "DATEVALUE", "DAY", "DAYS", "EDATE", "EOMONTH", "HOUR",
    "ISOWEEKNUM", "MINUTE", "MONTH", "NETWORKDAYS", "NETWORKDAYS.INTL", "NOW", "SECOND",
    "TIME", "TIMEVALUE", "TODAY", "WEEKDAY", "WEEKNUM", "WORKDAY", "WORKDAY.INTL",
    "YEAR", "YEARFRAC",
    // Information
    "CELL", "ERROR.TYPE", "INFO", "ISBLANK", "ISERR", "ISERROR", "ISEVEN", "ISFORMULA",
    "ISLOGICAL", "ISNA", "ISNONTEXT", "ISNUMBER", "ISODD", "ISREF", "ISTEXT", "N", "NA",
    "SHEET", "SHEETS", "TYPE",
    // Financial
    "CUMIPMT", "CUMPRINC", "DB", "DDB", "FV", "IPMT", "IRR", "MIRR", "NPER", "NPV",
    "PMT", "PPMT", "PV", "RATE", "SLN", "SYD", "XIRR", "XNPV",
    // Database
    "DAVERAGE", "DCOUNT", "DCOUNTA", "DGET", "DMAX", "DMIN", "DSUM",
];

static FUNCTION_TABLE: Lazy<HashSet<&'static str>> =
    Lazy::new(|| KNOWN_FUNCTIONS.iter().copied().collect());

/// Case-insensitive membership test.
pub fn is_known_function(name: &str) -> bool {
    FUNCTION_TABLE.contains(name.to_uppercase().as_str())
}

/// Returns the canonical (uppercased) name if `name` is a known function.
pub fn canonical_name(name: &str) -> Option<String> {
    let upper = name.to_uppercase();
    FUNCTION_TABLE.contains(upper.as_str()).then_some(upper)
}

