use crate::{Agent, Blackboard};

/// Agent that records every action and service payload it receives.
///
/// `script` holds one blackboard write per service fire, applied in order.
#[derive(Default)]
pub(crate) struct Recorder {
    pub log: Vec<&'static str>,
    pub samples: usize,
    pub script: Vec<(&'static str, f64)>,
}

impl Agent for Recorder {
    type Action = &'static str;
    type Service = &'static str;

    fn act(&mut self, action: &Self::Action) {
        self.log.push(*action);
    }

    fn service(&mut self, service: &Self::Service, blackboard: &mut Blackboard) {
        if let Some((key, value)) = self.script.get(self.samples) {
            blackboard.set(*key, *value);
        }
        self.samples += 1;
        self.log.push(*service);
    }
}
