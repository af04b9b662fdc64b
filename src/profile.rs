use crate::api::LoginResponse;

/// Account data returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    pub name: String,
    /// Day of the month the invoice is due
    pub due_date: String,
    pub email: String,
    pub mobile_number: String,
    pub client_code: String,
    pub vehicle_count: u32,
    pub blocked: bool,
    pub bank_account: BankAccount,
    pub address: Address,
}

/// Checking account used for automatic debit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccount {
    pub bank_name: String,
    pub branch_name: String,
    pub branch_number: String,
    pub account_number: String,
    pub account_digit: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub city: String,
    pub state: String,
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub zip_code: String,
}

impl From<LoginResponse> for AccountProfile {
    fn from(response: LoginResponse) -> Self {
        let financial = response.dados_financeiros;
        let account = financial.conta_corrente;
        let address = financial.endereco;
        Self {
            name: response.usuario,
            due_date: financial.dia_vencimento_conta,
            email: response.email,
            mobile_number: response.celular,
            client_code: response.codigo_cliente,
            vehicle_count: response.quantidade_veiculos,
            blocked: response.bloqueado,
            bank_account: BankAccount {
                bank_name: account.banco.nome,
                branch_name: account.nome_agencia,
                branch_number: account.identificador_agencia,
                account_number: account.numero_conta,
                account_digit: account.digito,
            },
            address: Address {
                city: address.cidade,
                state: address.estado,
                street: address.logradouro,
                number: address.numero,
                neighborhood: address.bairro,
                zip_code: address.cep,
            },
        }
    }
}
