//! Names of the runtime library the generated code depends on.
//!
//! The generator never links against this library; it only refers to its
//! classes by name.

pub const CALLER: &str = "Phpro\\SoapClient\\Caller\\Caller";
pub const ENGINE_CALLER: &str = "Phpro\\SoapClient\\Caller\\EngineCaller";
pub const EVENT_DISPATCHING_CALLER: &str = "Phpro\\SoapClient\\Caller\\EventDispatchingCaller";
pub const DEFAULT_ENGINE_FACTORY: &str = "Phpro\\SoapClient\\Soap\\DefaultEngineFactory";
pub const ENGINE_OPTIONS: &str = "Phpro\\SoapClient\\Soap\\EngineOptions";
pub const ENCODER_REGISTRY: &str = "Soap\\Encoding\\EncoderRegistry";
pub const EVENT_DISPATCHER: &str = "Symfony\\Component\\EventDispatcher\\EventDispatcher";

pub const SOAP_EXCEPTION: &str = "Phpro\\SoapClient\\Exception\\SoapException";

pub const MIXED_RESULT: &str = "Phpro\\SoapClient\\Type\\MixedResult";
pub const MULTI_ARGUMENT_REQUEST: &str = "Phpro\\SoapClient\\Type\\MultiArgumentRequest";
pub const REQUEST_INTERFACE: &str = "Phpro\\SoapClient\\Type\\RequestInterface";
pub const RESULT_INTERFACE: &str = "Phpro\\SoapClient\\Type\\ResultInterface";
pub const RESULT_PROVIDER_INTERFACE: &str = "Phpro\\SoapClient\\Type\\ResultProviderInterface";

pub const ITERATOR_AGGREGATE: &str = "IteratorAggregate";
pub const ARRAY_ITERATOR: &str = "ArrayIterator";
pub const JSON_SERIALIZABLE: &str = "JsonSerializable";

/// Parameter name of the aggregate request in multi-argument calls.
pub const MULTI_ARGUMENT_PARAMETER: &str = "multiArgumentRequest";
