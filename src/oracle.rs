use tracing::error;
use varisat::{CnfFormula, ExtendFormula, Lit, Solver, Var};

/// The outcome of one satisfiability query.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Verdict {
    /// A model exists and can be probed through [`Oracle::value`].
    Satisfiable,
    /// No assignment satisfies the constraints added so far.
    Unsatisfiable,
    /// The engine could not decide. Fatal to an exhaustive census, which must never confuse
    /// "undecided" with "no boards left".
    Unknown,
}

/// A satisfiability engine as the census consumes one: add constraints, query, probe the latest
/// model.
///
/// Constraints accumulate across queries; the census leans on this to rule out each board it has
/// already seen. [`VarisatOracle`] is the production implementation.
pub trait Oracle {
    /// Add every clause of `formula` to the constraint store.
    fn add_formula(&mut self, formula: &CnfFormula);
    /// Add a single clause to the constraint store.
    fn add_clause(&mut self, clause: &[Lit]);
    /// Decide satisfiability of everything added so far.
    fn check(&mut self) -> Verdict;
    /// The truth value of `var` in the model behind the last [`Verdict::Satisfiable`], or [`None`]
    /// if there is no such model or it does not cover `var`.
    fn value(&self, var: Var) -> Option<bool>;
}

/// An [`Oracle`] backed by the varisat CDCL solver.
pub struct VarisatOracle {
    solver: Solver<'static>,
    model: Option<Vec<Lit>>,
}

impl VarisatOracle {
    /// A fresh solver with an empty constraint store.
    pub fn new() -> Self {
        Self {
            solver: Solver::new(),
            model: None,
        }
    }
}

impl Default for VarisatOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl Oracle for VarisatOracle {
    fn add_formula(&mut self, formula: &CnfFormula) {
        self.model = None;
        self.solver.add_formula(formula);
    }

    fn add_clause(&mut self, clause: &[Lit]) {
        self.model = None;
        self.solver.add_clause(clause);
    }

    fn check(&mut self) -> Verdict {
        match self.solver.solve() {
            Ok(true) => {
                self.model = self.solver.model();
                match self.model {
                    Some(_) => Verdict::Satisfiable,
                    // varisat broke its own contract; report undecided rather than guess
                    None => Verdict::Unknown,
                }
            }
            Ok(false) => {
                self.model = None;
                Verdict::Unsatisfiable
            }
            Err(err) => {
                self.model = None;
                error!("varisat could not decide satisfiability: {err}");
                Verdict::Unknown
            }
        }
    }

    fn value(&self, var: Var) -> Option<bool> {
        self.model
            .as_ref()
            .and_then(|model| model.get(var.index()))
            .map(|lit| lit.is_positive())
    }
}
