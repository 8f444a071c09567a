#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use dtmf_matcher::{
        symbol, Automaton, CompileError, CompiledPattern, EngineError, MatchError, MatchVerdict,
        Matcher, Options, OversizePolicy, PartialOutcome, Symbol,
    };
    use proptest::prelude::*;

    ///
    /// Reference engine : the pattern is a finite list of words separated by '|'
    struct FiniteLanguage {
        words: Vec<Vec<u8>>,
        full_calls: AtomicUsize,
    }
    impl FiniteLanguage {
        fn accepts(&self, input: &[u8]) -> bool {
            self.words.iter().any(|w| w == input)
        }
    }
    impl Automaton for FiniteLanguage {
        fn compile(pattern: &str) -> Result<Self, CompileError> {
            if pattern.is_empty() || pattern.contains('(') {
                return Err(CompileError::new(pattern, "not a word list"));
            }
            Ok(Self {
                words: pattern.split('|').map(|w| w.as_bytes().to_vec()).collect(),
                full_calls: AtomicUsize::new(0),
            })
        }
        fn partial_exec(&self, input: &[u8]) -> Result<PartialOutcome, EngineError> {
            if self.accepts(input) {
                Ok(PartialOutcome::Full)
            } else if self.words.iter().any(|w| w.starts_with(input)) {
                Ok(PartialOutcome::Partial)
            } else {
                Ok(PartialOutcome::None)
            }
        }
        fn full_exec(&self, input: &[u8]) -> Result<bool, EngineError> {
            self.full_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.accepts(input))
        }
    }

    ///
    /// Engine matching everything in partial mode, failing when probed
    struct BrokenProbe;
    impl Automaton for BrokenProbe {
        fn compile(_pattern: &str) -> Result<Self, CompileError> {
            Ok(Self)
        }
        fn partial_exec(&self, input: &[u8]) -> Result<PartialOutcome, EngineError> {
            match input.first() {
                Some(b'#') => Err(EngineError::Quit {
                    byte: b'#',
                    offset: 0,
                }),
                _ => Ok(PartialOutcome::Full),
            }
        }
        fn full_exec(&self, _input: &[u8]) -> Result<bool, EngineError> {
            Err(EngineError::Start("probe refused".to_string()))
        }
    }

    fn calls(matcher: &Matcher<FiniteLanguage>) -> usize {
        let pattern = matcher.pattern().unwrap();
        pattern.automaton().full_calls.load(Ordering::SeqCst)
    }

    #[test]
    fn test_fake_engine() {
        let matcher = Matcher::<FiniteLanguage>::compiled("12|123|*9").unwrap();
        let cases = [
            ("", MatchVerdict::PotentialMatch),
            ("1", MatchVerdict::PotentialMatch),
            ("12", MatchVerdict::Match { is_final: false }),
            ("123", MatchVerdict::Match { is_final: true }),
            ("*9", MatchVerdict::Match { is_final: true }),
            ("13", MatchVerdict::NoMatch),
        ];
        for (i, (input, expected)) in cases.iter().enumerate() {
            assert_eq!(
                matcher.find_match_str(input).unwrap(),
                *expected,
                "Case {} : '{input}'",
                i + 1
            );
        }
    }

    #[test]
    fn test_probing_is_bounded() {
        let matcher = Matcher::<FiniteLanguage>::compiled("5").unwrap();
        assert_eq!(
            matcher.find_match_str("5").unwrap(),
            MatchVerdict::Match { is_final: true }
        );
        assert_eq!(calls(&matcher), 16, "Every symbol probed once");

        let matcher = Matcher::<FiniteLanguage>::compiled("5|5D").unwrap();
        assert_eq!(
            matcher.find_match_str("5").unwrap(),
            MatchVerdict::Match { is_final: false }
        );
        assert!(calls(&matcher) <= 16);
    }

    #[test]
    fn test_oversize_assume_final_does_not_probe() {
        let mut options = Options::default();
        options
            .set_max_input_len(2)
            .set_oversize_policy(OversizePolicy::AssumeFinal);
        let pattern = CompiledPattern::<FiniteLanguage>::compile("123|1234").unwrap();
        let matcher = Matcher::with_pattern(pattern, options);
        assert_eq!(
            matcher.find_match_str("123").unwrap(),
            MatchVerdict::Match { is_final: true }
        );
        assert_eq!(calls(&matcher), 0);
        assert_eq!(
            matcher.find_match_str("124").unwrap(),
            MatchVerdict::NoMatch
        );
    }

    #[test]
    fn test_engine_errors_propagate() {
        let matcher = Matcher::<BrokenProbe>::compiled("anything").unwrap();
        assert_eq!(
            matcher.find_match_str("1"),
            Err(MatchError::Engine(EngineError::Start(
                "probe refused".to_string()
            )))
        );
        assert_eq!(
            matcher.find_match_str("#"),
            Err(MatchError::Engine(EngineError::Quit {
                byte: b'#',
                offset: 0
            }))
        );
    }

    #[test]
    fn test_compile_error_surfaced() {
        let mut matcher = Matcher::<FiniteLanguage>::default();
        assert!(matcher.compile("(1").is_err());
        assert_eq!(matcher.find_match_str("1"), Err(MatchError::NotCompiled));
    }

    #[test]
    fn test_shared_pattern_across_threads() {
        let pattern: CompiledPattern = CompiledPattern::compile(r"^(?:[0-9]{4}#|\*9)$").unwrap();
        std::thread::scope(|s| {
            for input in ["1234#", "*9", "12", "*7"] {
                let matcher = Matcher::with_pattern(pattern.clone(), Options::default());
                s.spawn(move || {
                    let expected = matcher.find_match_str(input).unwrap();
                    for _ in 0..50 {
                        assert_eq!(matcher.find_match_str(input).unwrap(), expected);
                    }
                });
            }
        });
    }

    const PATTERNS: [&str; 6] = [
        "^[0-9]{3}$",
        "^[0-9]{2,4}$",
        r"^(?:[0-9]{4}#|\*9)$",
        "^16{0,3}$",
        "^6{2,}1$",
        "^[AB]*#?$",
    ];

    fn symbols(max: usize) -> impl Strategy<Value = Vec<Symbol>> {
        prop::collection::vec(prop::sample::select(Symbol::ALL.to_vec()), 0..max)
    }

    proptest! {
        #[test]
        fn prop_no_match_is_a_dead_end(
            pattern in prop::sample::select(PATTERNS.to_vec()),
            input in symbols(7),
            suffix in symbols(5),
        ) {
            let matcher: Matcher = Matcher::compiled(pattern).unwrap();
            if matcher.find_match(&input).unwrap() == MatchVerdict::NoMatch {
                let mut extended = input.clone();
                extended.extend(suffix);
                prop_assert_eq!(matcher.find_match(&extended).unwrap(), MatchVerdict::NoMatch);
            }
        }

        #[test]
        fn prop_finality_by_enumeration(
            pattern in prop::sample::select(PATTERNS.to_vec()),
            input in symbols(7),
        ) {
            let matcher: Matcher = Matcher::compiled(pattern).unwrap();
            if let MatchVerdict::Match { is_final } = matcher.find_match(&input).unwrap() {
                let extendable = Symbol::ALL.iter().any(|s| {
                    let mut next = input.clone();
                    next.push(*s);
                    matcher.find_match(&next).unwrap().is_match()
                });
                prop_assert_eq!(is_final, !extendable);
            }
        }

        #[test]
        fn prop_finite_language_finality(
            words in prop::collection::vec(symbols(4), 1..5),
            input in symbols(4),
        ) {
            let texts: Vec<String> = words.iter().map(|w| symbol::to_text(w)).collect();
            let words: Vec<String> = texts.into_iter().filter(|w| !w.is_empty()).collect();
            prop_assume!(!words.is_empty());
            let matcher = Matcher::<FiniteLanguage>::compiled(&words.join("|")).unwrap();
            let text = symbol::to_text(&input);

            let expected = if words.contains(&text) {
                let is_final = !Symbol::ALL
                    .iter()
                    .any(|s| words.contains(&format!("{text}{s}")));
                MatchVerdict::Match { is_final }
            } else if words.iter().any(|w| w.starts_with(&text)) {
                MatchVerdict::PotentialMatch
            } else {
                MatchVerdict::NoMatch
            };
            prop_assert_eq!(matcher.find_match(&input).unwrap(), expected);
        }

        #[test]
        fn prop_idempotent(
            pattern in prop::sample::select(PATTERNS.to_vec()),
            input in symbols(9),
        ) {
            let matcher: Matcher = Matcher::compiled(pattern).unwrap();
            prop_assert_eq!(matcher.find_match(&input), matcher.find_match(&input));
        }
    }
}
