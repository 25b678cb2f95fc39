use crate::data::truth_table::TruthTable;

/// Ordered input vectors, with one target per row when training.
///
/// Rows keep their order for the lifetime of the set; training and evaluation
/// both walk them front to back.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseSet {
    width: usize,
    inputs: Vec<Vec<f64>>,
    targets: Option<Vec<f64>>,
}

impl CaseSet {
    /// A set without targets, for inference only.
    ///
    /// # Panics
    /// Panics if `inputs` is empty or its rows differ in length.
    pub fn new(inputs: Vec<Vec<f64>>) -> CaseSet {
        assert!(!inputs.is_empty(), "a case set needs at least one case");
        let width = inputs[0].len();
        assert!(width >= 1, "cases need at least one input");
        assert!(
            inputs.iter().all(|row| row.len() == width),
            "every case must have {width} inputs"
        );
        CaseSet { width, inputs, targets: None }
    }

    /// A training set: `targets[i]` is the expected output for `inputs[i]`.
    ///
    /// # Panics
    /// Panics on the conditions of [`CaseSet::new`] or if the target count
    /// differs from the case count.
    pub fn with_targets(inputs: Vec<Vec<f64>>, targets: Vec<f64>) -> CaseSet {
        assert_eq!(
            inputs.len(),
            targets.len(),
            "one target is needed per case"
        );
        let mut set = CaseSet::new(inputs);
        set.targets = Some(targets);
        set
    }

    /// Every 0/1 combination of `width` inputs, in ascending binary order
    /// with input 0 as the most significant bit.
    pub fn binary(width: usize) -> CaseSet {
        CaseSet::new(binary_rows(width).map(|bits| to_inputs(&bits)).collect())
    }

    /// All binary rows for `table` paired with the table's targets.
    pub fn from_truth_table(table: TruthTable) -> CaseSet {
        let (inputs, targets) = binary_rows(table.width())
            .map(|bits| (to_inputs(&bits), table.target(&bits)))
            .unzip();
        CaseSet::with_targets(inputs, targets)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Number of inputs per case.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn inputs(&self) -> &[Vec<f64>] {
        &self.inputs
    }

    pub fn targets(&self) -> Option<&[f64]> {
        self.targets.as_deref()
    }

    /// Iterates `(input, target)` pairs.
    ///
    /// # Panics
    /// Panics if the set was built without targets.
    pub fn training_pairs(&self) -> impl Iterator<Item = (&[f64], f64)> {
        let targets = self
            .targets
            .as_deref()
            .expect("training requires a case set with targets");
        self.inputs.iter().map(Vec::as_slice).zip(targets.iter().copied())
    }
}

fn binary_rows(width: usize) -> impl Iterator<Item = Vec<bool>> {
    (0..1usize << width).map(move |row| {
        (0..width).map(|k| (row >> (width - 1 - k)) & 1 == 1).collect()
    })
}

fn to_inputs(bits: &[bool]) -> Vec<f64> {
    bits.iter().map(|&b| if b { 1.0 } else { 0.0 }).collect()
}
