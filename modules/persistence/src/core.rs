//! Reliable-delivery subsystem aggregation.

mod actor_path;
mod actor_ref;
mod any_message;
mod at_least_once_delivery;
mod at_least_once_delivery_config;
mod at_least_once_delivery_snapshot;
mod backoff;
mod backoff_reset;
mod child_lifecycle;
mod config_error;
mod confirmable;
mod confirmable_envelope;
mod confirmation;
mod deduplicating_handler;
mod deduplicating_receiver;
mod deduplicating_receiver_settings;
mod delivery_transport;
mod in_memory_journal;
mod in_memory_snapshot_store;
mod journal;
mod journal_error;
mod manual_scheduler;
mod message_sink;
mod persistence_error;
mod persistence_supervisor;
mod persistence_supervisor_config;
mod persistent_repr;
mod pid;
mod prune_senders_tick;
mod random_provider;
mod receive_ordering;
mod receiver_state;
mod receiver_state_snapshot;
mod redelivery_tick;
mod scheduler;
mod scheduler_error;
mod scheduler_handle;
mod send_error;
mod snapshot_metadata;
mod snapshot_selection_criteria;
mod snapshot_store;
mod snapshot_store_error;
mod supervision_policy;
mod supervisor_directive;
mod supervisor_messages;
mod unconfirmed_delivery;
mod unconfirmed_warning;
mod unordered_receiver_state;

// Re-exports from actor_path
pub use actor_path::ActorPath;
// Re-exports from actor_ref
pub use actor_ref::ActorRef;
// Re-exports from any_message
pub use any_message::AnyMessage;
// Re-exports from at_least_once_delivery
pub use at_least_once_delivery::AtLeastOnceDelivery;
// Re-exports from at_least_once_delivery_config
pub use at_least_once_delivery_config::AtLeastOnceDeliveryConfig;
// Re-exports from at_least_once_delivery_snapshot
pub use at_least_once_delivery_snapshot::AtLeastOnceDeliverySnapshot;
// Re-exports from backoff
pub use backoff::calculate_backoff_delay;
// Re-exports from backoff_reset
pub use backoff_reset::BackoffReset;
// Re-exports from child_lifecycle
pub use child_lifecycle::ChildLifecycle;
// Re-exports from config_error
pub use config_error::ConfigError;
// Re-exports from confirmable
pub use confirmable::Confirmable;
// Re-exports from confirmable_envelope
pub use confirmable_envelope::ConfirmableEnvelope;
// Re-exports from confirmation
pub use confirmation::Confirmation;
// Re-exports from deduplicating_handler
pub use deduplicating_handler::DeDuplicatingHandler;
// Re-exports from deduplicating_receiver
pub use deduplicating_receiver::DeDuplicatingReceiver;
// Re-exports from deduplicating_receiver_settings
pub use deduplicating_receiver_settings::DeDuplicatingReceiverSettings;
// Re-exports from delivery_transport
pub use delivery_transport::DeliveryTransport;
// Re-exports from in_memory_journal
pub use in_memory_journal::InMemoryJournal;
// Re-exports from in_memory_snapshot_store
pub use in_memory_snapshot_store::InMemorySnapshotStore;
// Re-exports from journal
pub use journal::Journal;
// Re-exports from journal_error
pub use journal_error::JournalError;
// Re-exports from manual_scheduler
pub use manual_scheduler::{ManualScheduler, ScheduledEntry};
// Re-exports from message_sink
pub use message_sink::MessageSink;
// Re-exports from persistence_error
pub use persistence_error::PersistenceError;
// Re-exports from persistence_supervisor
pub use persistence_supervisor::PersistenceSupervisor;
// Re-exports from persistence_supervisor_config
pub use persistence_supervisor_config::PersistenceSupervisorConfig;
// Re-exports from persistent_repr
pub use persistent_repr::PersistentRepr;
// Re-exports from pid
pub use pid::Pid;
// Re-exports from prune_senders_tick
pub use prune_senders_tick::PruneSendersTick;
// Re-exports from random_provider
pub use random_provider::{RandomProvider, SmallRngRandomProvider};
// Re-exports from receive_ordering
pub use receive_ordering::ReceiveOrdering;
// Re-exports from receiver_state
pub use receiver_state::ReceiverState;
// Re-exports from receiver_state_snapshot
pub use receiver_state_snapshot::ReceiverStateSnapshot;
// Re-exports from redelivery_tick
pub use redelivery_tick::RedeliveryTick;
// Re-exports from scheduler
pub use scheduler::Scheduler;
// Re-exports from scheduler_error
pub use scheduler_error::SchedulerError;
// Re-exports from scheduler_handle
pub use scheduler_handle::SchedulerHandle;
// Re-exports from send_error
pub use send_error::SendError;
// Re-exports from snapshot_metadata
pub use snapshot_metadata::SnapshotMetadata;
// Re-exports from snapshot_selection_criteria
pub use snapshot_selection_criteria::SnapshotSelectionCriteria;
// Re-exports from snapshot_store
pub use snapshot_store::{SnapshotLoadResult, SnapshotStore};
// Re-exports from snapshot_store_error
pub use snapshot_store_error::SnapshotStoreError;
// Re-exports from supervision_policy
pub use supervision_policy::{DefaultSupervisionPolicy, SupervisionPolicy};
// Re-exports from supervisor_directive
pub use supervisor_directive::SupervisorDirective;
// Re-exports from supervisor_messages
pub use supervisor_messages::{
  ChildTerminated, CurrentChild, DoReset, GetCurrentChild, GetRestartCount, ResetRestartCountTick, RestartCount,
  StartChildTick,
};
// Re-exports from unconfirmed_delivery
pub use unconfirmed_delivery::UnconfirmedDelivery;
// Re-exports from unconfirmed_warning
pub use unconfirmed_warning::UnconfirmedWarning;
// Re-exports from unordered_receiver_state
pub use unordered_receiver_state::UnorderedReceiverState;
