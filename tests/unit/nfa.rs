//! NFA construction and simulation.

use levseek::{Nfa, StateSet, Symbol};

/// `a (b|c)* d` with an epsilon shortcut from start to the loop.
fn looped() -> Nfa<u8> {
    let mut nfa = Nfa::new(0);
    nfa.add_transition(0, Symbol::Char('a'), 1);
    nfa.add_transition(0, Symbol::Epsilon, 1);
    nfa.add_transition(1, Symbol::Char('b'), 1);
    nfa.add_transition(1, Symbol::Char('c'), 1);
    nfa.add_transition(1, Symbol::Char('d'), 2);
    nfa.add_final_state(2);
    nfa
}

#[test]
fn test_epsilon_closure_follows_chains() {
    let mut nfa: Nfa<u8> = Nfa::new(0);
    nfa.add_transition(0, Symbol::Epsilon, 1);
    nfa.add_transition(1, Symbol::Epsilon, 2);
    nfa.add_transition(2, Symbol::Epsilon, 0);
    nfa.add_transition(2, Symbol::Char('x'), 3);

    let closure = nfa.epsilon_closure([0]);
    assert_eq!(closure.as_slice(), &[0, 1, 2]);
}

#[test]
fn test_accepts_with_epsilon_and_loops() {
    let nfa = looped();
    for input in ["d", "ad", "abd", "acbcd", "bbd"] {
        assert!(nfa.accepts(input), "{:?}", input);
    }
    for input in ["", "a", "abc", "dd", "ade", "x"] {
        assert!(!nfa.accepts(input), "{:?}", input);
    }
}

#[test]
fn test_any_matches_every_char() {
    let mut nfa: Nfa<u8> = Nfa::new(0);
    nfa.add_transition(0, Symbol::Any, 1);
    nfa.add_final_state(1);
    for c in ['a', '\0', 'é', '日', '\u{10FFFF}'] {
        assert!(nfa.accepts(&c.to_string()), "{:?}", c);
    }
    assert!(!nfa.accepts(""));
    assert!(!nfa.accepts("ab"));
}

#[test]
fn test_next_states_merges_char_and_any() {
    let mut nfa: Nfa<u8> = Nfa::new(0);
    nfa.add_transition(0, Symbol::Char('a'), 1);
    nfa.add_transition(0, Symbol::Any, 2);
    let start: StateSet<u8> = [0].into_iter().collect();

    assert_eq!(nfa.next_states(&start, Symbol::Char('a')).as_slice(), &[1, 2]);
    assert_eq!(nfa.next_states(&start, Symbol::Char('b')).as_slice(), &[2]);
    assert_eq!(nfa.next_states(&start, Symbol::Any).as_slice(), &[2]);
}

#[test]
fn test_outgoing_symbols_sorted_chars_first() {
    let mut nfa: Nfa<u8> = Nfa::new(0);
    nfa.add_transition(0, Symbol::Any, 1);
    nfa.add_transition(0, Symbol::Char('z'), 1);
    nfa.add_transition(0, Symbol::Char('b'), 1);
    let start: StateSet<u8> = [0].into_iter().collect();

    let symbols: Vec<Symbol> = nfa.outgoing_symbols(&start).into_iter().collect();
    assert_eq!(symbols, [Symbol::Char('b'), Symbol::Char('z'), Symbol::Any]);
}

#[test]
fn test_counts() {
    let nfa = looped();
    assert_eq!(nfa.state_count(), 3);
    assert_eq!(nfa.transition_count(), 5);
}
