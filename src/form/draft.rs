//! Line-item form model.
//!
//! The form holds raw text exactly as typed, so half-edited numbers are
//! representable; totals coerce anything unparsable to zero and validation
//! decides whether the draft can be submitted. The draft list never becomes
//! empty: removal is rejected at one remaining item and loading an empty
//! persisted list falls back to a single blank draft.

use rust_decimal::Decimal;

use crate::models::ProdutoPedido;

/// Minimum accepted line value (one centavo).
const VALOR_MINIMO: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// A single text field with a touched flag.
///
/// `touched` mirrors the original form's interacted-with state: validation
/// messages only show for fields the user touched, unless a failed submit
/// marks everything at once.
#[derive(Clone, Debug, Default)]
pub struct Field {
    value: String,
    touched: bool,
}

impl Field {
    /// Creates an empty, untouched field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an untouched field with an initial value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            touched: false,
        }
    }

    /// Current raw text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the text and marks the field touched.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.touched = true;
    }

    /// Marks the field as interacted-with.
    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }
}

/// Parses user-typed decimal input, accepting `,` as decimal separator.
///
/// Returns `None` for anything that is not a plain decimal number.
pub fn parse_decimal(texto: &str) -> Option<Decimal> {
    let normalizado = texto.trim().replace(',', ".");
    if normalizado.is_empty() {
        return None;
    }
    normalizado.parse().ok()
}

/// Validates a name field: trimmed length of at least two characters.
pub fn nome_valido(nome: &str) -> bool {
    nome.trim().chars().count() >= 2
}

/// An editable line item.
#[derive(Clone, Debug)]
pub struct LineItemDraft {
    /// Persisted id, kept through edits so the server can match rows.
    pub id: Option<i64>,
    pub nome_produto: Field,
    pub quantidade: Field,
    pub valor: Field,
}

impl LineItemDraft {
    /// A fresh draft: empty name, quantity 1, value 0.
    ///
    /// The zero value is deliberately below the minimum so a blank row is
    /// invalid until the user fills it in.
    pub fn blank() -> Self {
        Self {
            id: None,
            nome_produto: Field::new(),
            quantidade: Field::with_value("1"),
            valor: Field::with_value("0"),
        }
    }

    /// A draft pre-filled from a persisted line item.
    pub fn from_produto(produto: &ProdutoPedido) -> Self {
        Self {
            id: produto.id,
            nome_produto: Field::with_value(&produto.nome_produto),
            quantidade: Field::with_value(produto.quantidade_comprada.normalize().to_string()),
            valor: Field::with_value(produto.valor_total_produto.to_string()),
        }
    }

    /// Quantity coerced for totals: unparsable input counts as zero.
    pub fn quantidade_ou_zero(&self) -> Decimal {
        parse_decimal(self.quantidade.value()).unwrap_or(Decimal::ZERO)
    }

    /// Value coerced for totals: unparsable input counts as zero.
    pub fn valor_ou_zero(&self) -> Decimal {
        parse_decimal(self.valor.value()).unwrap_or(Decimal::ZERO)
    }

    pub fn nome_valido(&self) -> bool {
        nome_valido(self.nome_produto.value())
    }

    /// Quantity must parse and be at least 1.
    pub fn quantidade_valida(&self) -> bool {
        parse_decimal(self.quantidade.value()).is_some_and(|q| q >= Decimal::ONE)
    }

    /// Value must parse and be at least 0.01.
    pub fn valor_valido(&self) -> bool {
        parse_decimal(self.valor.value()).is_some_and(|v| v >= VALOR_MINIMO)
    }

    /// A draft is valid iff all three field rules hold.
    pub fn is_valid(&self) -> bool {
        self.nome_valido() && self.quantidade_valida() && self.valor_valido()
    }

    fn mark_all_touched(&mut self) {
        self.nome_produto.mark_touched();
        self.quantidade.mark_touched();
        self.valor.mark_touched();
    }

    /// Converts a valid draft into its wire form.
    ///
    /// Callers must check [`is_valid`](Self::is_valid) first; an invalid
    /// draft yields zeroed numeric fields rather than panicking.
    pub fn to_produto(&self) -> ProdutoPedido {
        ProdutoPedido {
            id: self.id,
            nome_produto: self.nome_produto.value().trim().to_string(),
            quantidade_comprada: self.quantidade_ou_zero(),
            valor_total_produto: self.valor_ou_zero(),
        }
    }
}

/// Outcome of [`LineItemForm::remove_at`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The last remaining draft cannot be removed.
    Rejected,
}

/// Ordered, never-empty collection of line-item drafts.
#[derive(Clone, Debug)]
pub struct LineItemForm {
    drafts: Vec<LineItemDraft>,
}

impl LineItemForm {
    /// Starts with a single blank draft.
    pub fn new() -> Self {
        Self {
            drafts: vec![LineItemDraft::blank()],
        }
    }

    pub fn drafts(&self) -> &[LineItemDraft] {
        &self.drafts
    }

    pub fn drafts_mut(&mut self) -> &mut [LineItemDraft] {
        &mut self.drafts
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        // Invariant: never empty. Kept for API completeness.
        self.drafts.is_empty()
    }

    /// Appends a blank draft. Always succeeds.
    pub fn add_blank(&mut self) {
        self.drafts.push(LineItemDraft::blank());
    }

    /// Removes the draft at `index` unless it is the only one left.
    ///
    /// Out-of-range indices are also rejected.
    pub fn remove_at(&mut self, index: usize) -> RemoveOutcome {
        if self.drafts.len() > 1 && index < self.drafts.len() {
            self.drafts.remove(index);
            RemoveOutcome::Removed
        } else {
            RemoveOutcome::Rejected
        }
    }

    /// Replaces the whole sequence with drafts for the given persisted
    /// items, falling back to one blank draft when the list is empty.
    pub fn load_from(&mut self, produtos: &[ProdutoPedido]) {
        if produtos.is_empty() {
            self.drafts = vec![LineItemDraft::blank()];
        } else {
            self.drafts = produtos.iter().map(LineItemDraft::from_produto).collect();
        }
    }

    /// Sum of the value fields, unparsable input counted as zero.
    pub fn total_value(&self) -> Decimal {
        self.drafts.iter().map(LineItemDraft::valor_ou_zero).sum()
    }

    /// Sum of the quantity fields, unparsable input counted as zero.
    pub fn total_quantity(&self) -> Decimal {
        self.drafts
            .iter()
            .map(LineItemDraft::quantidade_ou_zero)
            .sum()
    }

    /// Flags every field of every draft as touched.
    pub fn mark_all_touched(&mut self) {
        for draft in &mut self.drafts {
            draft.mark_all_touched();
        }
    }

    /// All drafts pass their field rules.
    pub fn all_valid(&self) -> bool {
        self.drafts.iter().all(LineItemDraft::is_valid)
    }

    /// Wire form of every draft, in display order.
    pub fn to_produtos(&self) -> Vec<ProdutoPedido> {
        self.drafts.iter().map(LineItemDraft::to_produto).collect()
    }
}

impl Default for LineItemForm {
    fn default() -> Self {
        Self::new()
    }
}
