//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for formatter integration tests.

#![allow(dead_code)]

use formatter::{beautify, try_beautify, BeautifyError, FormattingOptions};

/// Test harness holding one set of formatting options.
pub struct FormatHarness {
    pub options: FormattingOptions,
}

impl FormatHarness {
    /// Create a harness with default options.
    pub fn new() -> Self {
        FormatHarness {
            options: FormattingOptions::default(),
        }
    }

    /// Create a harness from a (possibly partial) JSON options object.
    pub fn with_json(json: &str) -> Self {
        FormatHarness {
            options: FormattingOptions::from_json(json).unwrap(),
        }
    }

    pub fn beautify(&self, formula: &str) -> String {
        beautify(formula, &self.options)
    }

    pub fn try_beautify(&self, formula: &str) -> Result<String, BeautifyError> {
        try_beautify(formula, &self.options)
    }

    /// Beautify `formula` and then feed the output back in `passes` more times.
    /// Returns every output in order.
    pub fn passes(&self, formula: &str, passes: usize) -> Vec<String> {
        let mut outputs = vec![self.beautify(formula)];
        for _ in 0..passes {
            let next = self.beautify(outputs.last().unwrap());
            outputs.push(next);
        }
        outputs
    }
}

/// Formulas shaped like the ones found in real workbooks.
pub struct FormulaFixture;

impl FormulaFixture {
    pub fn well_formed() -> Vec<&'static str> {
        vec![
            "=SUM(A1:A10)",
            "=IF(A1>100,\"High\",\"Low\")",
            "=IF(SUM(A1:A10)>100,AVERAGE(B1:B20),0)",
            "=IF(A1,IF(B1,SUM(C1),0),1)",
            "=VLOOKUP(A1,Sheet2!$A$1:$D$100,4,FALSE)",
            "=IFERROR(INDEX(B:B,MATCH(D1,A:A,0)),\"\")",
            "=SUMIFS(C:C,A:A,\">=100\",B:B,\"<>x\")",
            "=(A1+B1)*(C1-D1)/2",
            "=(SUM(A1)+1)*2",
            "=A1&\" - \"&B1",
            "=-A1+5",
            "=ROUND(1,5;2)",
            "=IF(A1,\"a;b\",0)",
            "=IF(AND(A1>0,B1<10),\"ok\",IF(C1=\"\",\"blank\",\"no\"))",
            "=CONCATENATE(\"Total: \",TEXT(SUM(B2:B50),\"#,##0.00\"))",
            "=NOW()",
            "SUM(A1,B1)",
        ]
    }

    pub fn malformed() -> Vec<&'static str> {
        vec![
            "=SUM(",
            "=SUM(A1,A2",
            "=)",
            "=((",
            "=\"",
            "=SUM(A1,\"x",
            "=IF(,,)",
            "=)))(((",
            "=├─",
            "= - ",
            "=A1::B2",
            "=SUM(A1))",
            "=A1)+B1",
            "",
            "=",
        ]
    }

    /// Formulas that start with a connector glyph rather than with the
    /// glyph's own indentation.
    pub fn glyph_prefixed() -> Vec<&'static str> {
        vec!["├=A1", "─ = 1", "│=SUM(A1)", "└─=IF(A1,1,2)", "=├A1"]
    }

    /// Same formulas written with ',' and with ';' separators.
    pub fn separator_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("=IF(A1>100,\"High\",\"Low\")", "=IF(A1>100;\"High\";\"Low\")"),
            (
                "=IF(SUM(A1:A10)>100,AVERAGE(B1:B20),0)",
                "=IF(SUM(A1:A10)>100;AVERAGE(B1:B20);0)",
            ),
            ("=VLOOKUP(A1,B:C,2,FALSE)", "=VLOOKUP(A1;B:C;2;FALSE)"),
            (
                "=IF(A1,IF(B1,SUM(C1),0),1)",
                "=IF(A1;IF(B1;SUM(C1);0);1)",
            ),
        ]
    }
}
