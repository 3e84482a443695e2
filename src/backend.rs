use url::Url;

use crate::client::{ChainClient, LcdClient};
use crate::error::Result;
use crate::menu::Resolved;
use crate::signer::{CliKey, Signer};

/// Hands the harness a chain client and a signer once the network is known.
#[allow(async_fn_in_trait)]
pub trait Backend {
    type Client: ChainClient;
    type Signer: Signer;

    fn client(&self, resolved: &Resolved) -> Result<Self::Client>;
    async fn signer(&self, key: &str, resolved: &Resolved) -> Result<Self::Signer>;
}

/// LCD for chain access, `terracli` for keys.
#[derive(Debug, Clone)]
pub struct Terra {
    pub lcd: Option<Url>,
    pub terracli: String,
    pub node: Option<String>,
}

impl Backend for Terra {
    type Client = LcdClient;
    type Signer = CliKey;

    fn client(&self, resolved: &Resolved) -> Result<LcdClient> {
        let base = self
            .lcd
            .clone()
            .unwrap_or_else(|| resolved.network.default_lcd());
        Ok(LcdClient::new(base))
    }

    async fn signer(&self, key: &str, resolved: &Resolved) -> Result<CliKey> {
        CliKey::load(&self.terracli, key, &resolved.chain_id, self.node.clone()).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Doubles for the chain client and signer.

    use std::cell::{Cell, RefCell};

    use serde_json::{json, Value};

    use super::*;
    use crate::client::QueryResult;
    use crate::tx::{SignedTx, TxResult, UnsignedTx};
    use crate::types::AccAddress;

    pub const SIGNER: &str = "terra1qnufjmd8vwm6j6d3q28wxqr4d8408f340plraj";

    /// Fails the test if the harness ever reaches for the network.
    pub struct Unreachable;

    impl ChainClient for Unreachable {
        async fn broadcast(&self, _: &SignedTx) -> Result<TxResult> {
            panic!("broadcast must not be called")
        }

        async fn query(&self, _: &AccAddress, _: &Value) -> Result<QueryResult> {
            panic!("query must not be called")
        }
    }

    impl Signer for Unreachable {
        fn address(&self) -> &AccAddress {
            panic!("signer must not be used")
        }

        async fn sign(&self, _: &UnsignedTx) -> Result<SignedTx> {
            panic!("signer must not be used")
        }
    }

    impl Backend for Unreachable {
        type Client = Unreachable;
        type Signer = Unreachable;

        fn client(&self, _: &Resolved) -> Result<Unreachable> {
            panic!("client must not be built")
        }

        async fn signer(&self, _: &str, _: &Resolved) -> Result<Unreachable> {
            panic!("signer must not be loaded")
        }
    }

    /// Records every call and answers with canned responses.
    #[derive(Default)]
    pub struct Recorder {
        pub broadcasts: RefCell<Vec<Value>>,
        pub queries: RefCell<Vec<(AccAddress, Value)>>,
        pub tx_response: RefCell<Option<Value>>,
        pub signed_with: RefCell<Option<String>>,
        pub clients_built: Cell<usize>,
    }

    impl Recorder {
        pub fn answering_tx(response: Value) -> Self {
            let recorder = Self::default();
            recorder.tx_response.replace(Some(response));
            recorder
        }
    }

    pub struct RecordingClient<'a>(&'a Recorder);

    impl ChainClient for RecordingClient<'_> {
        async fn broadcast(&self, tx: &SignedTx) -> Result<TxResult> {
            self.0.broadcasts.borrow_mut().push(tx.0.clone());
            let response = self
                .0
                .tx_response
                .borrow()
                .clone()
                .unwrap_or_else(|| json!({ "height": "0", "txhash": "CAFE", "raw_log": "[]" }));
            Ok(TxResult::from_response(response)?)
        }

        async fn query(&self, contract: &AccAddress, msg: &Value) -> Result<QueryResult> {
            self.0
                .queries
                .borrow_mut()
                .push((contract.clone(), msg.clone()));
            Ok(QueryResult {
                height: "1".into(),
                result: json!({ "echo": msg }),
            })
        }
    }

    pub struct RecordingSigner {
        address: AccAddress,
    }

    impl Signer for RecordingSigner {
        fn address(&self) -> &AccAddress {
            &self.address
        }

        async fn sign(&self, tx: &UnsignedTx) -> Result<SignedTx> {
            let mut body = serde_json::to_value(tx)?;
            body["signatures"] = json!([{ "signature": "c2ln" }]);
            Ok(SignedTx(body))
        }
    }

    impl<'a> Backend for &'a Recorder {
        type Client = RecordingClient<'a>;
        type Signer = RecordingSigner;

        fn client(&self, _: &Resolved) -> Result<RecordingClient<'a>> {
            self.clients_built.set(self.clients_built.get() + 1);
            Ok(RecordingClient(*self))
        }

        async fn signer(&self, key: &str, _: &Resolved) -> Result<RecordingSigner> {
            self.signed_with.replace(Some(key.to_string()));
            Ok(RecordingSigner {
                address: SIGNER.parse()?,
            })
        }
    }
}
