//! Token classifiers: total mappings from source token kinds onto the
//! target operator enums, plus the file-format name table.

use crate::ast::operators::*;
use crate::source::tokens::*;

/// Source `STORED AS` names and the storage format names they map to.
/// Lookup is case-insensitive on the key.
pub const FILE_FORMATS: &[(&str, &str)] = &[
    ("SEQUENCEFILE", "SequenceFile"),
    ("TEXTFILE", "TextFile"),
    ("RCFILE", "RCText"),
    ("ORC", "ORC"),
    ("PARQUET", "Parquet"),
    ("AVRO", "Avro"),
    ("JSONFILE", "JSON"),
];

pub(crate) fn file_format(name: &str) -> Option<&'static str> {
    let key = name.to_ascii_uppercase();
    FILE_FORMATS
        .iter()
        .find(|(source, _)| *source == key)
        .map(|(_, target)| *target)
}

pub(crate) fn arithmetic_operator(token: ArithmeticToken) -> ArithmeticOperator {
    match token {
        ArithmeticToken::Plus => ArithmeticOperator::Add,
        ArithmeticToken::Minus => ArithmeticOperator::Subtract,
        ArithmeticToken::Asterisk => ArithmeticOperator::Multiply,
        ArithmeticToken::Slash => ArithmeticOperator::Divide,
        ArithmeticToken::Percent => ArithmeticOperator::Modulus,
    }
}

pub(crate) fn comparison_operator(token: ComparisonToken) -> ComparisonOperator {
    match token {
        ComparisonToken::Eq => ComparisonOperator::Equal,
        ComparisonToken::Neq => ComparisonOperator::NotEqual,
        ComparisonToken::Lt => ComparisonOperator::LessThan,
        ComparisonToken::Lte => ComparisonOperator::LessThanOrEqual,
        ComparisonToken::Gt => ComparisonOperator::GreaterThan,
        ComparisonToken::Gte => ComparisonOperator::GreaterThanOrEqual,
    }
}

pub(crate) fn logical_operator(token: LogicalToken) -> LogicalOperator {
    match token {
        LogicalToken::And => LogicalOperator::And,
        LogicalToken::Or => LogicalOperator::Or,
    }
}

pub(crate) fn sign(token: SignToken) -> Sign {
    match token {
        SignToken::Plus => Sign::Plus,
        SignToken::Minus => Sign::Minus,
    }
}

/// Singular and plural spellings collapse onto the same field.
pub(crate) fn interval_field(token: IntervalFieldToken) -> IntervalField {
    match token {
        IntervalFieldToken::Year | IntervalFieldToken::Years => IntervalField::Year,
        IntervalFieldToken::Month | IntervalFieldToken::Months => IntervalField::Month,
        IntervalFieldToken::Day | IntervalFieldToken::Days => IntervalField::Day,
        IntervalFieldToken::Hour | IntervalFieldToken::Hours => IntervalField::Hour,
        IntervalFieldToken::Minute | IntervalFieldToken::Minutes => IntervalField::Minute,
        IntervalFieldToken::Second | IntervalFieldToken::Seconds => IntervalField::Second,
    }
}

pub(crate) fn frame_type(token: FrameTypeToken) -> FrameType {
    match token {
        FrameTypeToken::Range => FrameType::Range,
        FrameTypeToken::Rows => FrameType::Rows,
    }
}

pub(crate) fn bounded_bound(token: BoundDirectionToken) -> BoundType {
    match token {
        BoundDirectionToken::Preceding => BoundType::Preceding,
        BoundDirectionToken::Following => BoundType::Following,
    }
}

pub(crate) fn unbounded_bound(token: BoundDirectionToken) -> BoundType {
    match token {
        BoundDirectionToken::Preceding => BoundType::UnboundedPreceding,
        BoundDirectionToken::Following => BoundType::UnboundedFollowing,
    }
}

pub(crate) fn ordering(token: OrderingToken) -> Ordering {
    match token {
        OrderingToken::Asc => Ordering::Ascending,
        OrderingToken::Desc => Ordering::Descending,
    }
}

pub(crate) fn null_ordering(token: NullOrderingToken) -> NullOrdering {
    match token {
        NullOrderingToken::First => NullOrdering::First,
        NullOrderingToken::Last => NullOrdering::Last,
    }
}

pub(crate) fn quantifier(token: QuantifierToken) -> Quantifier {
    match token {
        QuantifierToken::All => Quantifier::All,
        QuantifierToken::Any => Quantifier::Any,
        QuantifierToken::Some => Quantifier::Some,
    }
}

pub(crate) fn date_time_function(token: DateTimeFunctionToken) -> CurrentTimeFunction {
    match token {
        DateTimeFunctionToken::CurrentDate => CurrentTimeFunction::Date,
        DateTimeFunctionToken::CurrentTime => CurrentTimeFunction::Time,
        DateTimeFunctionToken::CurrentTimestamp => CurrentTimeFunction::Timestamp,
        DateTimeFunctionToken::Localtime => CurrentTimeFunction::Localtime,
        DateTimeFunctionToken::Localtimestamp => CurrentTimeFunction::Localtimestamp,
    }
}

pub(crate) fn set_operator(token: SetOperatorToken) -> SetOperator {
    match token {
        SetOperatorToken::Union => SetOperator::Union,
        SetOperatorToken::Intersect => SetOperator::Intersect,
        SetOperatorToken::Except => SetOperator::Except,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn file_format_table_is_exact() {
        let expected = [
            ("SEQUENCEFILE", "SequenceFile"),
            ("TEXTFILE", "TextFile"),
            ("RCFILE", "RCText"),
            ("ORC", "ORC"),
            ("PARQUET", "Parquet"),
            ("AVRO", "Avro"),
            ("JSONFILE", "JSON"),
        ];
        assert_eq!(FILE_FORMATS, &expected[..]);
        for (source, target) in expected {
            assert_eq!(file_format(source), Some(target));
            assert_eq!(file_format(&source.to_lowercase()), Some(target));
        }
    }

    #[test]
    fn unknown_file_format_misses() {
        assert_eq!(file_format("CARBONDATA"), None);
    }

    #[test]
    fn plural_interval_fields_collapse() {
        assert_eq!(interval_field(IntervalFieldToken::Days), IntervalField::Day);
        assert_eq!(
            interval_field(IntervalFieldToken::Seconds),
            IntervalField::Second
        );
    }
}
