use monkey::parse;
use proptest::prelude::*;

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-z_]{1,6}".prop_filter("keywords are not identifiers", |s| {
        !matches!(
            s.as_str(),
            "fn" | "let" | "true" | "false" | "if" | "else" | "return"
        )
    })
}

fn operand_strategy() -> impl Strategy<Value = String> {
    prop_oneof![identifier_strategy(), "[0-9]{1,9}"]
}

const SUM: &[&str] = &["+", "-"];
const PRODUCT: &[&str] = &["*", "/"];
const LESS_GREATER: &[&str] = &["<", ">"];
const EQUALS: &[&str] = &["==", "!="];

fn same_rank_operators() -> impl Strategy<Value = &'static [&'static str]> {
    prop_oneof![Just(SUM), Just(PRODUCT), Just(LESS_GREATER), Just(EQUALS)]
}

proptest! {
    #[test]
    fn equal_rank_chains_nest_to_the_left(
        first in operand_strategy(),
        rest in prop::collection::vec((0usize..2, operand_strategy()), 1..6),
        ops in same_rank_operators(),
    ) {
        let mut source = first.clone();
        let mut want = first;
        for (op, operand) in &rest {
            source = format!("{} {} {}", source, ops[*op], operand);
            want = format!("({} {} {})", want, ops[*op], operand);
        }

        let (program, errors) = parse(&source);
        prop_assert!(errors.is_empty(), "errors: {:?}", errors);
        prop_assert_eq!(program.to_string(), want);
    }

    #[test]
    fn arbitrary_ascii_never_panics(source in "[ -~\t\n]{0,64}") {
        let _ = parse(&source);
    }

    #[test]
    fn rendering_reparses_to_itself(
        a in operand_strategy(),
        b in operand_strategy(),
        c in operand_strategy(),
    ) {
        let (first, errors) = parse(&format!("-{} * {} + {}", a, b, c));
        prop_assert!(errors.is_empty());
        let rendered = first.to_string();
        let (second, errors) = parse(&rendered);
        prop_assert!(errors.is_empty());
        prop_assert_eq!(second.to_string(), rendered);
    }
}
