use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{
    category::Category,
    debt::Debt,
    goal::Goal,
    transaction::{EntryKind, Transaction},
    user::Users,
};

/// The complete financial state, persisted as a single JSON document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialDocument {
    pub users: Users,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub budget: Map<String, Value>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub debts: Vec<Debt>,
}

impl FinancialDocument {
    /// An empty document with no categories, goals, or debts.
    pub fn empty(user1: impl Into<String>, user2: impl Into<String>) -> Self {
        Self {
            users: Users::new(user1, user2),
            transactions: Vec::new(),
            categories: Vec::new(),
            budget: Map::new(),
            goals: Vec::new(),
            debts: Vec::new(),
        }
    }

    /// Seed document used the first time a store is opened.
    pub fn bootstrap(user1: impl Into<String>, user2: impl Into<String>) -> Self {
        let mut document = Self::empty(user1, user2);
        document.categories = default_categories();
        document.goals = vec![
            Goal::new(1, "Fundo de Emergência", 20000.0, 5000.0).with_monthly_contribution(1000.0),
            Goal::new(2, "Viagem Europa", 15000.0, 3000.0).with_monthly_contribution(800.0),
        ];
        document
    }

    /// Picks an id no smaller than `now_millis` and strictly greater than any
    /// existing transaction id.
    pub fn next_transaction_id(&self, now_millis: i64) -> i64 {
        let last = self.transactions.iter().map(|txn| txn.id).max();
        match last {
            Some(last) if last >= now_millis => last + 1,
            _ => now_millis,
        }
    }

    pub fn transaction(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn goal(&self, id: u64) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub fn goal_mut(&mut self, id: u64) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|goal| goal.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

fn default_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Moradia", EntryKind::Expense).with_subcategories([
            "Aluguel",
            "Condomínio",
            "Energia",
            "Água",
            "Internet",
        ]),
        Category::new(2, "Alimentação", EntryKind::Expense).with_subcategories([
            "Supermercado",
            "Restaurante",
            "Lanches",
        ]),
        Category::new(3, "Transporte", EntryKind::Expense).with_subcategories([
            "Combustível",
            "Estacionamento",
            "Manutenção",
            "Ônibus/Uber",
        ]),
        Category::new(4, "Saúde", EntryKind::Expense).with_subcategories([
            "Plano de Saúde",
            "Médico",
            "Remédios",
            "Academia",
        ]),
        Category::new(5, "Lazer", EntryKind::Expense).with_subcategories([
            "Cinema", "Viagens", "Hobbies",
        ]),
        Category::new(6, "Educação", EntryKind::Expense).with_subcategories([
            "Cursos",
            "Livros",
            "Faculdade",
        ]),
        Category::new(7, "Salário", EntryKind::Income).with_subcategories([
            "Principal",
            "Bônus",
            "Freelance",
        ]),
        Category::new(8, "Investimentos", EntryKind::Income)
            .with_subcategories(["Dividendos", "Rendimentos"]),
    ]
}
