use {
    crate::helpers::common::{init_mollusk, resulting_account, setup_counter_account},
    counter::instruction::{decrement, increment, reset, update, CounterInstruction},
    mollusk_svm::{result::Check, Mollusk},
    solana_account::Account,
    solana_pubkey::Pubkey,
};

pub struct MutateResult {
    pub counter: Pubkey,
    pub counter_account: Account,
}

/// Drives a single mutating instruction against a pre-initialized counter
/// account, with overridable authority wiring for failure cases.
pub struct MutateBuilder<'a> {
    mollusk: Mollusk,
    instruction: CounterInstruction,
    starting_count: u64,
    counter_account: Option<Account>,
    stored_authority: Option<Pubkey>,
    signing_authority: Option<Pubkey>,
    authority_signs: bool,
    checks: Vec<Check<'a>>,
}

impl Default for MutateBuilder<'_> {
    fn default() -> Self {
        Self {
            mollusk: init_mollusk(),
            instruction: CounterInstruction::Reset,
            starting_count: 0,
            counter_account: None,
            stored_authority: None,
            signing_authority: None,
            authority_signs: true,
            checks: vec![],
        }
    }
}

impl<'a> MutateBuilder<'a> {
    pub fn instruction(mut self, instruction: CounterInstruction) -> Self {
        self.instruction = instruction;
        self
    }

    pub fn starting_count(mut self, count: u64) -> Self {
        self.starting_count = count;
        self
    }

    pub fn counter_account(mut self, account: Account) -> Self {
        self.counter_account = Some(account);
        self
    }

    pub fn stored_authority(mut self, key: Pubkey) -> Self {
        self.stored_authority = Some(key);
        self
    }

    pub fn signing_authority(mut self, key: Pubkey) -> Self {
        self.signing_authority = Some(key);
        self
    }

    pub fn authority_does_not_sign(mut self) -> Self {
        self.authority_signs = false;
        self
    }

    pub fn check(mut self, check: Check<'a>) -> Self {
        self.checks.push(check);
        self
    }

    pub fn execute(mut self) -> MutateResult {
        let counter_addr = Pubkey::new_unique();
        let stored_authority = self.stored_authority.unwrap_or_else(Pubkey::new_unique);
        let signing_authority = self.signing_authority.unwrap_or(stored_authority);

        let counter_account = self
            .counter_account
            .unwrap_or_else(|| setup_counter_account(self.starting_count, &stored_authority));

        let mut instruction = match self.instruction {
            CounterInstruction::Increment { amount } => {
                increment(&counter::id(), &counter_addr, &signing_authority, amount)
            }
            CounterInstruction::Decrement { amount } => {
                decrement(&counter::id(), &counter_addr, &signing_authority, amount)
            }
            CounterInstruction::Update { amount } => {
                update(&counter::id(), &counter_addr, &signing_authority, amount)
            }
            CounterInstruction::Reset => reset(&counter::id(), &counter_addr, &signing_authority),
            CounterInstruction::Initialize => panic!("initialize is not a mutation"),
        };

        if !self.authority_signs {
            instruction.accounts[1].is_signer = false;
        }

        if self.checks.is_empty() {
            self.checks.push(Check::success());
        }

        let accounts = &[
            (counter_addr, counter_account),
            (signing_authority, Account::default()),
        ];
        let result = self
            .mollusk
            .process_and_validate_instruction(&instruction, accounts, &self.checks);

        MutateResult {
            counter: counter_addr,
            counter_account: resulting_account(&result, &counter_addr),
        }
    }
}
